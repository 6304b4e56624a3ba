use rapl::{evaluate_line, Environment, Value};

fn eval_script(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut env = Environment::new();
    let mut last = None;
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        last = evaluate_line(line, &mut env)?;
    }
    Ok(last)
}

fn render(source: &str) -> String {
    match eval_script(source) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => panic!("Script produced no value:\n{source}"),
        Err(e) => panic!("Script failed: {e}\n{source}"),
    }
}

fn error_message(source: &str) -> String {
    match eval_script(source) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(render("1 + 2"), "3");
    assert_eq!(render("8 - 5"), "3");
    assert_eq!(render("3 x 4"), "12");
    assert_eq!(render("10 % 2"), "5");
    assert_eq!(render("1 % 4"), "0.25");
    assert_eq!(render("7 mod 4"), "3");
    assert_eq!(render("7 | 4"), "3");
}

#[test]
fn application_is_right_to_left() {
    // `10 - 4 - 2` groups as `10 - (4 - 2)`.
    assert_eq!(render("10 - 4 - 2"), "8");
    assert_eq!(render("2 x 3 + 1"), "8");
}

#[test]
fn monadic_arithmetic() {
    assert_eq!(render("- 5"), "-5");
    assert_eq!(render("+ 5"), "5");
    assert_eq!(render("x (0 - 3)"), "-1");
    assert_eq!(render("x 0"), "0");
    assert_eq!(render("% 4"), "0.25");
    assert_eq!(render("mod (0 - 5)"), "5");
    assert_eq!(render("bigger 2.3"), "3");
    assert_eq!(render("smaller 2.3"), "2");
}

#[test]
fn division_by_zero_is_reported() {
    assert!(error_message("1 % 0").contains("divide (%)"));
    assert!(error_message("% 0").contains("divide (%)"));
    assert!(error_message("5 mod 0").contains("modulus (|)"));
}

#[test]
fn negative_modulus_keeps_the_sign() {
    assert_eq!(render("(0 - 7) mod 4"), "-3");
}

#[test]
fn text_concatenation_and_case() {
    assert_eq!(render(r#""abc" + "def""#), "abcdef");
    assert_eq!(render(r#"5 + "abc""#), "5abc");
    assert_eq!(render(r#""abc" + 5"#), "abc5");
    assert_eq!(render(r#"+ "aBc""#), "ABC");
    assert_eq!(render(r#"- "aBc""#), "abc");
    assert_eq!(render(r#"~ "aBc""#), "AbC");
}

#[test]
fn text_cropping_and_removal() {
    assert_eq!(render(r#""abc" - 1"#), "ab");
    assert_eq!(render(r#""abcd" - "bc""#), "ad");
    assert!(error_message(r#""abc" - 9"#).contains("cropped"));
    assert!(error_message(r#""abc" - "zz""#).contains("does not occur"));
}

#[test]
fn text_repetition_and_chunks() {
    assert_eq!(render(r#"3 x "ab""#), "ababab");
    assert_eq!(render(r#""ab" x 2"#), "abab");
    assert_eq!(render(r#""abcdef" % 2"#), "[ab cd ef]");
    assert_eq!(render(r#"% "abc""#), "[a b c]");
}

#[test]
fn malformed_numbers_fall_back_to_text() {
    assert_eq!(render("1.2.3"), "1.2.3");
    assert_eq!(render("p 1.2.3"), "[1 5]");
}

#[test]
fn unterminated_text_runs_to_the_end() {
    assert_eq!(render(r#"1 + "abc"#), "1abc");
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(render("1+2"), "3");
    assert_eq!(render("[1 2 3]+1"), "[2 3 4]");
}

#[test]
fn scanning_stops_at_unclassifiable_characters() {
    assert_eq!(render("1 ¤ 2"), "1");
    assert_eq!(render("5 + 3 ¤ nonsense"), "8");
}

#[test]
fn matrix_broadcasting() {
    assert_eq!(render("[1 2 3] + 1"), "[2 3 4]");
    assert_eq!(render("2 x [1 2 3]"), "[2 4 6]");
    assert_eq!(render("[1 2] + [3 4]"), "[4 6]");
    assert_eq!(render("[10 20] - [1 2]"), "[9 18]");
}

#[test]
fn matrix_shape_mismatch_is_reported() {
    assert!(error_message("[1 2] + [1 2 3]").contains("same size"));
}

#[test]
fn size_and_reshape() {
    assert_eq!(render("p 5"), "[1 1]");
    assert_eq!(render(r#"p "hello""#), "[1 5]");
    assert_eq!(render("p [1 2 3]"), "[1 3]");
    assert_eq!(render("3 p 7"), "[7 7 7]");
    assert_eq!(render("2 p [1 2 3 4]"), "[1 2]\n[3 4]");
    assert_eq!(render("[2 2] p 9"), "[9 9]\n[9 9]");
    assert!(error_message("5 p [1 2 3]").contains("cannot be arranged"));
}

#[test]
fn indexing_and_extraction() {
    assert_eq!(render("i 4"), "[1 2 3 4]");
    assert_eq!(render("1 i [5 6 7]"), "6");
    assert_eq!(render("[1 0] i (2 p [1 2 3 4])"), "3");
    assert_eq!(render("2 $ [5 6 7]"), "7");
    assert_eq!(render("[1 0] $ (2 p [1 2 3 4])"), "3");
    assert!(error_message("5 $ [1 2]").contains("outside"));
}

#[test]
fn find_reports_positions() {
    assert_eq!(render("3 find [1 2 3 4]"), "[0 2]");
    assert_eq!(render("9 find [1 2]"), "-1");
    assert_eq!(render(r#""bc" find "abcd""#), "1");
    assert_eq!(render(r#""zz" find "abcd""#), "-1");
    assert_eq!(render(r#""b" find ["ab" "cd"]"#), "[1 -1]");
}

#[test]
fn factorial_family() {
    assert_eq!(render("! 4"), "6");
    assert_eq!(render("5 ! 2"), "10");
    assert_eq!(render("3 ! [3 4 5]"), "[1 0 0]");
}

#[test]
fn power_log_and_sqrt() {
    assert_eq!(render("2 ^ 3"), "8");
    assert_eq!(render("^ 0"), "1");
    assert_eq!(render("sqrt 9"), "3");
    assert_eq!(render("(8 log 2) > 2.9"), "1");
    assert_eq!(render("(log E) > 0.9"), "1");
}

#[test]
fn comparisons_yield_canonical_booleans() {
    assert_eq!(render("2 > 1"), "1");
    assert_eq!(render("2 < 1"), "0");
    assert_eq!(render("3 >= 3"), "1");
    assert_eq!(render("2 <= 1"), "0");
    assert_eq!(render("[1 2] = [1 2]"), "1");
    assert_eq!(render("[1 2] = [1 3]"), "0");
    assert_eq!(render("1 = [1 2 1]"), "[1 0 1]");
    assert_eq!(render(r#""abc" = "abd""#), "[1 1 0]");
}

#[test]
fn monadic_extremes() {
    assert_eq!(render("> [3 9 4]"), "9");
    assert_eq!(render("< [3 9 4]"), "3");
}

#[test]
fn bigger_and_smaller() {
    assert_eq!(render("2 bigger 7"), "7");
    assert_eq!(render("2 smaller 7"), "2");
    assert_eq!(render(r#""a" bigger "b""#), "b");
    assert_eq!(render(r#""b" smaller "a""#), "a");
}

#[test]
fn invert_on_numbers() {
    assert_eq!(render("~ 0"), "1");
    assert_eq!(render("~ 1"), "0");
    assert_eq!(render("~ 5"), "-5");
}

#[test]
fn reduce_folds_in_reverse() {
    assert_eq!(render("+/[1 2 3 4]"), "10");
    // `- / [1 2 3]` is `(3 - 2) - 1`.
    assert_eq!(render("-/[1 2 3]"), "0");
    assert_eq!(render("+/(2 p [1 2 3 4])"), "[7 10]");
}

#[test]
fn scan_keeps_intermediate_results() {
    assert_eq!(render(r"+\[1 2 3 4]"), "[4 7 9 10]");
    assert_eq!(render(r"+\(2 p [1 2 3 4])"), "[4 7]\n[9 10]");
}

#[test]
fn compress_filters_by_mask() {
    assert_eq!(render(r"[1 0 1] \ [5 6 7]"), "[5 7]");
    assert_eq!(render(r#"[1 0 1 1] \ "abcd""#), "acd");
    assert!(error_message(r"[1 0] \ [5 6 7]").contains("same size"));
}

#[test]
fn inner_product_pairs_rows_with_columns() {
    assert_eq!(render("[1 2] +.x (1 p [3 4])"), "[11]");
    assert_eq!(render("(2 p [1 2 3 4]) +.x (2 p [5 6 7 8])"), "[19 50]");
}

#[test]
fn outer_product_pairs_everything() {
    assert_eq!(render("[1 2 3] @.x [4 5]"), "[4 5]\n[8 10]\n[12 15]");
}

#[test]
fn variables_persist_across_lines() {
    assert_eq!(render("variable X is 5\nX + 1"), "6");
    assert_eq!(render("variable X is 5\nvariable X is 7\nX"), "7");
    assert!(error_message("Y + 1").contains("Unknown variable"));
}

#[test]
fn seeded_constants() {
    assert_eq!(render("E > 2.7"), "1");
    assert_eq!(render("PI < 3.2"), "1");
    assert_eq!(render("TRUE"), "1");
    assert_eq!(render("FALSE"), "0");
    assert!(error_message("variable TRUE is 2").contains("reserved"));
    assert!(error_message("variable PI is 3").contains("reserved"));
}

#[test]
fn let_binds_for_the_body_only() {
    assert_eq!(render("let X as 5 in X + 1"), "6");
    assert_eq!(render("let X as (2 x 3) in X"), "6");
    assert_eq!(render("variable X is 1\nlet X as 2 in X + 0\nX"), "1");
    assert!(error_message("let X as 5 in X\nX").contains("Unknown variable"));
}

#[test]
fn user_functions() {
    assert_eq!(render("function double A is A x 2\ndouble 7"), "14");
    assert_eq!(render("function add A B is A + B\n2 add 3"), "5");
    assert!(error_message("missing 1").contains("Unknown function"));
}

#[test]
fn a_name_can_carry_both_arities() {
    let script = "function f A is A + 1\nfunction f A B is A x B";
    assert_eq!(render(&format!("{script}\nf 3")), "4");
    assert_eq!(render(&format!("{script}\n2 f 3")), "6");
}

#[test]
fn functions_see_globals_but_not_caller_locals() {
    assert_eq!(render("variable G is 10\nfunction f A is A + G\nf 5"), "15");
    let message = error_message("function peek A is A + Y\nlet Y as 1 in peek 2");
    assert!(message.contains("Unknown variable"));
}

#[test]
fn functions_can_recurse() {
    let script = "function fact N is if N <= 1 then 1 else N x fact (N - 1)\nfact 5";
    assert_eq!(render(script), "120");
}

#[test]
fn conditionals() {
    assert_eq!(render("if 1 then 5 else 6"), "5");
    assert_eq!(render("if 0 then 5 else 6"), "6");
    // Only the canonical `1` selects the `then` branch of a numeric
    // condition.
    assert_eq!(render("if 2 then 5 else 6"), "6");
    assert_eq!(render("if [0 0 1] then 7 else 8"), "7");
    assert_eq!(render("if (0 x [1 1]) then 7 else 8"), "8");
}

#[test]
fn conditional_without_else_can_yield_nothing() {
    let result = eval_script("if 0 then 5").expect("script should succeed");
    assert!(result.is_none());
}

#[test]
fn deal_draws_within_bounds() {
    assert_eq!(render("(? 5) < 5"), "1");
    assert_eq!(render("0 <= (? 5)"), "1");
    assert_eq!(render("p (5 ? 10)"), "[1 5]");
    assert_eq!(render("p (10 ? 3)"), "[1 10]");
    assert_eq!(render("p (0 ? 5)"), "[0 0]");
    assert_eq!(render(r#"p (? "abc")"#), "[1 1]");
}

#[test]
fn deal_is_distinct_when_the_count_fits() {
    assert_eq!(render("sorta (3 ? 3)"), "[0 1 2]");
}

#[test]
fn sorta_sorts_ascending() {
    assert_eq!(render("sorta [3 1 2]"), "[1 2 3]");
    assert_eq!(render(r#"sorta "cab""#), "abc");
}

#[test]
fn unsupported_and_unimplemented_are_distinguished() {
    assert!(error_message(r#""a" x "b""#).contains("not acceptable"));
    assert!(error_message("1 ~ 2").contains("not been implemented"));
    assert!(error_message("5 nroot 2").contains("not been implemented"));
}

#[test]
fn parse_errors() {
    assert!(error_message("(1 + 2").contains("closing parenthesis"));
    assert!(error_message("[1 2").contains("closing bracket"));
    assert!(error_message("1 + 2 )").contains("Extra tokens"));
    assert!(error_message("+").contains("nothing to operate on"));
    assert!(error_message("1 2").contains("Unexpected token"));
    assert!(error_message("let X in 5").contains("keyword 'as'"));
    assert!(error_message("variable x is 5").contains("uppercase"));
}
