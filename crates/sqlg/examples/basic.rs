//! Basic usage example for sqlg
//!
//! Run with: cargo run --example basic -p sqlg
//!
//! Set RUST_LOG=sqlg.sql=debug to see the statements as `tracing` events.

use sqlg::{
    Assignments, Columns, CompExprs, Expr, Generator, Options, SqlgResult, Statement, Value,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Columns)]
#[allow(dead_code)]
struct User {
    id: u64,
    name: String,
    #[sqlg(skip)]
    height: u8,
}

fn print(label: &str, stmt: &Statement) {
    println!("*{label}");
    println!("{}", stmt.sql);
    println!("{:?}", stmt.params);
    println!();
}

fn main() -> SqlgResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let g = Generator::new(
        "user",
        Options::new()
            .and("id", Expr::eq(666))
            .and("deleted_at", Expr::is_null()),
    );
    print("select", &g.select::<&str>(&[]));

    let g = Generator::new(
        "user",
        Options::new()
            .and("id", Expr::gte(666))
            .or("name", Expr::eq("tom"))
            .order_by_desc("id")
            .limit(10),
    );
    print("select with OR", &g.select(&["id", "name"]));

    let g = Generator::new(
        "user",
        Options::new().and("deleted_at", Expr::is_null()).and_exprs(
            CompExprs::new()
                .with("name", Expr::eq("tom"))
                .with("id", Expr::eq(666)),
        ),
    );
    print("select by struct", &g.select_by_struct(Some(&User::default()))?);

    let g = Generator::new("user", Options::new().and("id", Expr::eq(666)).limit(1));
    let assignments = Assignments::new().with("name", "jerry").with("age", 3);
    print("update", &g.update(&assignments));
    print("delete", &g.delete());

    let columns = ["name", "age"];
    let g = Generator::table("user");
    let rows: Vec<Vec<Value>> = vec![
        vec!["tom".into(), 5.into()],
        vec!["jerry".into(), 3.into()],
    ];
    print("insert", &g.insert(&columns, &rows));

    let g = Generator::new(
        "user",
        Options::new()
            .on_duplicate_key_update(Assignments::new().with("name", "tom").with("age", 5)),
    );
    print(
        "insert on duplicate key update",
        &g.insert(&columns, &[vec!["tom".into(), 5.into()]]),
    );

    let g = Generator::new(
        "user",
        Options::new().not_exists(
            "user",
            CompExprs::new()
                .with("name", Expr::eq("tom"))
                .with("age", Expr::gte(5)),
        ),
    );
    print(
        "insert if not exists",
        &g.insert(&columns, &[vec!["tom".into(), 5.into()]]),
    );

    Ok(())
}
