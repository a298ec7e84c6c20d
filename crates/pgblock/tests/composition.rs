use pgblock::prelude::*;
use pgblock::{PlaceholderStyle, RenderConfig, Renderer, Sql};

fn placeholder_numbers(sql: &str) -> Vec<usize> {
    sql.split(' ')
        .filter_map(|token| token.strip_prefix('$'))
        .map(|n| n.parse().unwrap())
        .collect()
}

/// Builds a left-leaning tree of comparisons joined by AND/OR, `depth` levels deep.
fn nested(depth: usize, next: &mut i32) -> Block {
    if depth == 0 {
        *next += 1;
        return Column::new("v").unwrap().eq(p(*next));
    }
    let left = nested(depth - 1, next);
    let right = nested(depth - 1, next);
    let joiner = if depth % 2 == 0 { "AND" } else { "OR" };
    join(raw(joiner), pieces![left, right], true)
}

#[test]
fn placeholders_are_dense_and_ordered() {
    for depth in 0..6 {
        let mut next = 0;
        let block = nested(depth, &mut next);
        let rendered = block.render();

        let expected: Vec<usize> = (1..=rendered.params.len()).collect();
        assert_eq!(placeholder_numbers(&rendered.sql), expected, "depth {depth}");
        assert_eq!(rendered.params.len(), 1 << depth);

        // parameters come out in the order they were bound
        let values: Vec<String> = (1..=next).map(|v| v.to_string()).collect();
        assert_eq!(format!("{:?}", rendered.params), format!("[{}]", values.join(", ")));
    }
}

#[test]
fn parentheses_always_balance() {
    let mut next = 0;
    let rendered = nested(5, &mut next).render();
    let open = rendered.sql.matches('(').count();
    let close = rendered.sql.matches(')').count();
    assert_eq!(open, close);
    // one pair per comparison (32) and per join (31)
    assert_eq!(open, 63);
}

#[test]
fn reused_blocks_get_fresh_placeholders() {
    let cond = Column::new("a").unwrap().eq(p(1));
    let q = block![cond.clone(), raw("OR"), cond];
    assert_eq!(q.render().sql, "( a = $1 ) OR ( a = $2 )");
}

#[test]
fn one_renderer_many_blocks() {
    let renderer = Renderer::with_config(
        RenderConfig::new()
            .with_placeholder(PlaceholderStyle::Question)
            .no_truncate(),
    );
    let blocks: Vec<Block> = (0..4).map(|n| join(raw(","), (0..n).map(|i| p(i).into_sql()), true)).collect();

    let sql: Vec<String> = blocks.iter().map(|b| renderer.render(b).sql).collect();
    assert_eq!(sql, ["( )", "( ? )", "( ? , ? )", "( ? , ? , ? )"]);
}

#[test]
fn builder_inputs_mix_freely() {
    let inputs: Vec<Sql> = pieces![raw("a"), p(1), "text", 2.5_f64, Column::new("b").unwrap()];
    let rendered = join(raw(","), inputs, false).render();
    assert_eq!(rendered.sql, "a , $1 , $2 , $3 , b");
    assert_eq!(rendered.params.len(), 3);
}

#[test]
fn constraints_compose_into_table_ddl() {
    let columns = pieces![
        raw("room integer NOT NULL"),
        raw("during tstzrange NOT NULL"),
        raw("price numeric NOT NULL"),
        Check::new("price >= 0")
            .with_name("bookings_price_non_negative")
            .unwrap()
            .creation_sql()
            .unwrap(),
        Exclude::new([("room", "="), ("during", "&&")])
            .unwrap()
            .using_name("gist")
            .unwrap()
            .with_name("bookings_no_overlap")
            .unwrap()
            .creation_sql()
            .unwrap(),
    ];

    let ddl = block![raw("CREATE TABLE bookings"), join(raw(","), columns, true)];
    let rendered = ddl.render();
    assert!(rendered.is_parameterless());
    assert_eq!(
        rendered.sql,
        "CREATE TABLE bookings ( room integer NOT NULL , during tstzrange NOT NULL , \
         price numeric NOT NULL , CONSTRAINT bookings_price_non_negative CHECK ( price >= 0 ) , \
         CONSTRAINT bookings_no_overlap EXCLUDE USING gist ( room WITH = , during WITH && ) )"
    );
}
