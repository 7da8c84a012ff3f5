//! Property tests through the language surface

use feel::{Environment, Value, eval_str, matches_unary_tests};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_date_plus_minus_duration(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        days in -5000i64..5000,
        hours in 0i64..24,
    ) {
        let text = format!(
            r#"(date("{year:04}-{month:02}-{day:02}") + k) - k = date("{year:04}-{month:02}-{day:02}")"#
        );
        let sign = if days < 0 { "-" } else { "" };
        let k = eval_str(
            &format!(r#"duration("{sign}P{}DT{hours}H")"#, days.abs()),
            &Environment::new(),
        ).unwrap();
        prop_assert!(!k.is_null());
        let env = Environment::builder().variable("k", k).build();
        prop_assert_eq!(eval_str(&text, &env).unwrap(), Value::Boolean(true));
    }

    #[test]
    fn test_range_cell_membership(
        lo in -50i32..50,
        width in 0i32..30,
        point in -100i32..100,
        lo_incl: bool,
        hi_incl: bool,
    ) {
        let hi = lo + width;
        let open = if lo_incl { "[" } else { "(" };
        let close = if hi_incl { "]" } else { ")" };
        // parenthesize so negative bounds stay numbers
        let cell = format!("{open}({lo})..({hi}){close}");
        let above = if lo_incl { point >= lo } else { point > lo };
        let below = if hi_incl { point <= hi } else { point < hi };
        let matched = matches_unary_tests(&cell, &Value::number(f64::from(point)), &Environment::new()).unwrap();
        prop_assert_eq!(matched, above && below);
    }
}
