use pgblock::prelude::*;
use tokio_postgres::NoTls;
use tokio_postgres::error::SqlState;

async fn try_connect() -> Option<tokio_postgres::Client> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let (client, connection) = tokio_postgres::connect(&database_url, NoTls)
        .await
        .expect("Failed to connect to DATABASE_URL with NoTls");
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("tokio-postgres connection error: {e}");
        }
    });
    Some(client)
}

#[tokio::test]
async fn rendered_blocks_execute() -> Result<(), tokio_postgres::Error> {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL is not set; skipping rendered_blocks_execute");
        return Ok(());
    };

    let q = block![
        raw("SELECT"),
        p(1_i32).cast(&SqlType::Integer).eq(p(1_i32)),
        raw(","),
        p("x'); DROP TABLE pg_class; --").cast(&SqlType::Text),
    ];
    let rendered = q.render();
    let row = client.query_one(&rendered.sql, &rendered.params_ref()).await?;

    assert!(row.get::<_, bool>(0));
    assert_eq!(row.get::<_, String>(1), "x'); DROP TABLE pg_class; --");
    Ok(())
}

#[tokio::test]
async fn exclusion_constraint_rejects_overlaps() -> Result<(), tokio_postgres::Error> {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL is not set; skipping exclusion_constraint_rejects_overlaps");
        return Ok(());
    };

    let ex = Exclude::new([("during", "&&")])
        .and_then(|ex| ex.using(IndexMethod::Gist))
        .and_then(|ex| ex.with_name("pgblock_slots_no_overlap"))
        .and_then(|ex| ex.creation_sql())
        .expect("valid exclusion constraint");

    client
        .batch_execute(&format!(
            "CREATE TEMP TABLE pgblock_slots (during int4range NOT NULL, {})",
            ex.render_no_params()
        ))
        .await?;

    let insert = |lo: i32, hi: i32| {
        block![
            raw("INSERT INTO pgblock_slots (during) VALUES ( int4range("),
            p(lo),
            raw(","),
            p(hi),
            raw(") )"),
        ]
        .render()
    };

    let first = insert(1, 5);
    client.execute(&first.sql, &first.params_ref()).await?;

    let disjoint = insert(5, 9);
    client.execute(&disjoint.sql, &disjoint.params_ref()).await?;

    let overlapping = insert(3, 7);
    let err = client
        .execute(&overlapping.sql, &overlapping.params_ref())
        .await
        .expect_err("overlapping range must violate the constraint");
    assert_eq!(err.code(), Some(&SqlState::EXCLUSION_VIOLATION));
    Ok(())
}

#[tokio::test]
async fn check_constraint_is_enforced() -> Result<(), tokio_postgres::Error> {
    let Some(client) = try_connect().await else {
        eprintln!("DATABASE_URL is not set; skipping check_constraint_is_enforced");
        return Ok(());
    };

    let check = Check::new("price > 0")
        .with_name("pgblock_items_positive_price")
        .and_then(|c| c.creation_sql())
        .expect("valid check constraint");

    client
        .batch_execute(&format!(
            "CREATE TEMP TABLE pgblock_items (price integer NOT NULL, {})",
            check.render_no_params()
        ))
        .await?;

    let insert = block![raw("INSERT INTO pgblock_items (price) VALUES ("), p(-1_i32), raw(")")].render();
    let err = client
        .execute(&insert.sql, &insert.params_ref())
        .await
        .expect_err("negative price must violate the constraint");
    assert_eq!(err.code(), Some(&SqlState::CHECK_VIOLATION));
    Ok(())
}
