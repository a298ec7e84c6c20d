//! Example: room bookings that may not overlap, enforced by an exclusion constraint.
//!
//! Run with:
//!   cargo run --example exclusion -p pgblock
//!
//! Without a database the example only prints the generated SQL. With
//! `DATABASE_URL` set it also creates a temp table and shows the constraint
//! rejecting a double booking. `btree_gist` must be installed, since the
//! constraint mixes `=` on an integer with `&&` on a range.

use pgblock::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let room = Column::new("room")?;
    let no_double_booking = Exclude::new([(&room, "="), (&Column::new("during")?, "&&")])?
        .using(IndexMethod::Gist)?
        .filter(Column::new("cancelled")?.not_())
        .with_name("bookings_no_overlap")?;
    let positive_guests = Check::new(Column::new("guests")?.gt(raw("0"))).with_name("bookings_has_guests")?;

    let ddl = block![
        raw("CREATE TEMP TABLE bookings"),
        join(
            raw(","),
            pieces![
                raw("room integer NOT NULL"),
                raw("during int4range NOT NULL"),
                raw("guests integer NOT NULL"),
                raw("cancelled boolean NOT NULL DEFAULT false"),
                no_double_booking.creation_sql()?,
                positive_guests.creation_sql()?,
            ],
            true,
        ),
    ]
    .render_no_params();
    println!("{ddl}");

    let lookup = block![
        raw("SELECT count(*) FROM bookings WHERE"),
        and_(pieces![room.eq(p(12_i32)), Column::new("cancelled")?.not_()]),
    ]
    .render();
    println!("{}  -- {:?}", lookup.sql, lookup.params);

    let Ok(database_url) = env::var("DATABASE_URL") else {
        println!("DATABASE_URL is not set; not executing");
        return Ok(());
    };

    let (client, connection) = tokio_postgres::connect(&database_url, tokio_postgres::NoTls).await?;
    tokio::spawn(async move {
        let _ = connection.await;
    });

    client.batch_execute("CREATE EXTENSION IF NOT EXISTS btree_gist").await?;
    client.batch_execute(&ddl).await?;

    let book = |lo: i32, hi: i32| {
        block![
            raw("INSERT INTO bookings (room, during, guests) VALUES ("),
            join(raw(","), pieces![p(12_i32), block![raw("int4range("), p(lo), raw(","), p(hi), raw(")")], p(2_i32)], false),
            raw(")"),
        ]
        .render()
    };

    let first = book(10, 12);
    client.execute(&first.sql, &first.params_ref()).await?;
    println!("booked [10, 12)");

    let clash = book(11, 13);
    match client.execute(&clash.sql, &clash.params_ref()).await {
        Ok(_) => println!("unexpected: overlapping booking accepted"),
        Err(e) => println!("overlapping booking rejected: {e}"),
    }

    let rows = client.query_one(&lookup.sql, &lookup.params_ref()).await?;
    println!("active bookings for room 12: {}", rows.get::<_, i64>(0));

    Ok(())
}
