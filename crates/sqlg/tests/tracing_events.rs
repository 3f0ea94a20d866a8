//! Generated statements are reported on the `sqlg.sql` tracing target.

#![cfg(feature = "tracing")]

use sqlg::{Assignments, Expr, Generator, Options};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .finish();
    {
        let _guard = subscriber.set_default();
        f();
    }
    captured.output()
}

#[test]
fn statement_is_logged() {
    let g = Generator::new("user", Options::new().and("id", Expr::eq(1)));
    let out = capture(|| {
        g.delete();
    });
    assert!(out.contains("sqlg.sql"));
    assert!(out.contains("DELETE FROM `user` WHERE `id`=?"));
    assert!(out.contains("param_count=1"));
}

#[test]
fn skipped_statement_is_logged() {
    let g = Generator::table("user");
    let out = capture(|| {
        g.update(&Assignments::new());
    });
    assert!(out.contains("statement skipped"));
    assert!(out.contains("no assignments"));
}

#[test]
fn long_sql_is_truncated() {
    let columns: Vec<String> = (0..100).map(|i| format!("column_{i}")).collect();
    let g = Generator::table("user");
    let out = capture(|| {
        g.select(&columns);
    });
    assert!(out.contains("..."));
    assert!(!out.contains("column_99"));
}
