use std::fs;

use sigma::{RunReport, interpreter::value::core::Value, run, run_with_depth};
use walkdir::WalkDir;

fn assert_success(src: &str) -> RunReport {
    let report = run(src);

    if let Some(e) = &report.runtime_error {
        panic!("Script failed: {e}");
    }
    if let Some(e) = report.syntax_errors.first() {
        panic!("Script failed to parse: {e}");
    }

    report
}

fn assert_value(src: &str, expected: &Value) {
    let report = assert_success(src);
    assert_eq!(&report.value, expected, "wrong result for: {src}");
}

fn assert_output(src: &str, expected: &[&str]) {
    let report = assert_success(src);
    assert_eq!(report.output, expected, "wrong output for: {src}");
}

fn assert_runtime_failure(src: &str) {
    let report = run(src);
    assert!(report.runtime_error.is_some(),
            "script succeeded but was expected to fail: {src}");
}

fn assert_reference_failure(src: &str) {
    let report = run(src);
    let Some(error) = &report.runtime_error else {
        panic!("script succeeded but was expected to fail: {src}");
    };
    assert!(error.is_reference(), "expected a reference error, got: {error}");
}

fn assert_syntax_failure(src: &str) {
    let report = run(src);
    assert!(!report.syntax_errors.is_empty(),
            "script parsed but was expected not to: {src}");
}

#[test]
fn program_files_behave_as_named() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "sigma")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

        count += 1;
        let report = run(&source);

        if name.starts_with("ok_") {
            assert!(report.is_ok(), "{path:?} failed: {report:?}");
        } else if name.starts_with("err_") {
            assert!(!report.is_ok(), "{path:?} succeeded but was expected to fail");
        } else {
            panic!("{path:?} is named neither ok_* nor err_*");
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn declaration_assignment_and_logging() {
    assert_output("var x <- 5!!\nvar y <- x + 3!!\nlog{y}!!", &["8"]);
    assert_value("var x <- 2!!\nx <- x * 10!!", &Value::Number(20.0));
}

#[test]
fn declaration_without_initializer_binds_nothing() {
    assert_output("var x!!\nlog{x}!!", &["nothing"]);
    assert_value("var x!!\nx <- 3!!\nx!!", &Value::Number(3.0));
    assert_value("var x!!\nx ?? nothing!!", &Value::Bool(true));
}

#[test]
fn every_operator_level_is_right_associative() {
    assert_value("2 - 3 - 4!!", &Value::Number(3.0));
    assert_value("16 / 4 / 2!!", &Value::Number(8.0));
    assert_value("2 ^ 3 ^ 2!!", &Value::Number(512.0));
}

#[test]
fn compound_assignments() {
    assert_value("var x <- 2!!\nx +<- 3!!\nx!!", &Value::Number(5.0));
    assert_value("var x <- 9!!\nx /<- 2!!\nx!!", &Value::Number(4.5));
    assert_value("var x <- 9!!\nx //<- 2!!\nx!!", &Value::Number(4.0));
    assert_value("var x <- 2!!\nx ^<- 3!!\nx!!", &Value::Number(8.0));
}

#[test]
fn prefix_steps_update_their_variable() {
    assert_value("var x <- 5!!\n++x!!\n++x!!\nx!!", &Value::Number(7.0));
    assert_value("var x <- 5!!\n--x!!", &Value::Number(4.0));
}

#[test]
fn redeclaration_anywhere_on_the_chain_is_a_reference_error() {
    assert_reference_failure("var x <- 1!!\nvar x <- 2!!");
    assert_reference_failure("var x <- 1!!\nif{true} | var x <- 2!! |");
}

#[test]
fn sibling_scopes_may_reuse_names() {
    assert_success("if{true} | var x <- 1!! |\nif{true} | var x <- 2!! |");
}

#[test]
fn inner_assignment_reaches_the_outer_binding() {
    assert_value("var x <- 1!!\nif{true} | x <- 9!! |\nx!!", &Value::Number(9.0));
}

#[test]
fn functions_are_closures_over_their_defining_scope() {
    assert_output("func double <- var n | n * 2 |!!\nlog{double{4}}!!", &["8"]);
    assert_output("var total <- 0!!\n\
                   func bump <- var amount | total <- total + amount |!!\n\
                   bump{5}!!\nbump{7}!!\nlog{total}!!",
                  &["12"]);
}

#[test]
fn optional_parameters_default_to_nothing() {
    let src = "func describe <- var item [var detail]\n\
               | if{detail ?? nothing} | item | but | item + \" (\" + detail + \")\" | |!!\n\
               log{describe{\"cat\"}}!!\n\
               log{describe{\"cat\" \"striped\"}}!!";
    assert_output(src, &["cat", "cat (striped)"]);
}

#[test]
fn wrong_argument_counts_fail() {
    assert_runtime_failure("func double <- var n | n * 2 |!!\ndouble{1 2}!!");
    assert_runtime_failure("func double <- var n | n * 2 |!!\ndouble{}!!");
}

#[test]
fn call_depth_is_limited() {
    let report = run_with_depth("func spin <- | spin{} |!!\nspin{}!!", 16);
    let error = report.runtime_error.expect("expected the depth limit to trip");
    assert!(!error.is_reference());
}

#[test]
fn builtins_cannot_be_shadowed() {
    assert_syntax_failure("var log <- 1!!");
    assert_syntax_failure("func length <- var x | x |!!");
    assert_syntax_failure("var count <- 0!!");
}

#[test]
fn array_members_match_by_mutual_containment() {
    assert_value("contains{((1 2)) (2 1)}!!", &Value::Bool(true));
    assert_value("((1 2) 3) - ((2 1))!!", &Value::from(vec![Value::Number(3.0)]));
    assert_value("contains{((1 2)) (1)}!!", &Value::Bool(false));
}

#[test]
fn comparisons_rank_arrays_above_scalars() {
    assert_value("(1) > 1000!!", &Value::Bool(true));
    assert_value("\"abc\" ? 3!!", &Value::Bool(true));
    assert_value("\"abc\" ?? 3!!", &Value::Bool(false));
    assert_value("true < 2!!", &Value::Bool(true));
}

#[test]
fn closeness_uses_a_relative_window() {
    assert_value("10 ~ 10.4!!", &Value::Bool(true));
    assert_value("10 ~ 11!!", &Value::Bool(false));
    assert_value("10 !~ 11!!", &Value::Bool(true));
}

#[test]
fn cross_kind_arithmetic() {
    assert_value("3 + \" apples\"!!", &Value::from("3 apples"));
    assert_value("\"ab\" * 2.5!!", &Value::from("abba"));
    assert_value("2.5 * \"ab\"!!", &Value::from("ababa"));
    assert_value("\"sigma\" - 2!!", &Value::from("sig"));
    assert_value("\"banana\" - \"an\"!!", &Value::from("ba"));
    assert_value("1 + (2 3)!!",
                 &Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]));
    assert_value("(1 2) + 3!!",
                 &Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]));
    assert_value("8 / (2 4)!!", &Value::from(vec![Value::Number(4.0), Value::Number(2.0)]));
    assert_value("1 / 0!!", &Value::Number(f64::INFINITY));
    assert_value("true + true!!", &Value::Bool(true));
    assert_value("true - true!!", &Value::Bool(false));
}

#[test]
fn arithmetic_on_nothing_fails() {
    assert_runtime_failure("1 + nothing!!");
    assert_runtime_failure("var x <- nothing!!\nx * 2!!");
}

#[test]
fn casts_between_kinds() {
    assert_value("num.\"sigma\"!!", &Value::Number(5.0));
    assert_value("num.(1 2 3)!!", &Value::Number(3.0));
    assert_value("str.42!!", &Value::from("42"));
    assert_value("str.(1 (2 3))!!", &Value::from("(1 (2 3))"));
    assert_value("tf.0!!", &Value::Bool(false));
    assert_value("tf.\"x\"!!", &Value::Bool(true));
    assert_value("arr.3!!", &Value::from(vec![Value::Number(3.0)]));
    assert_runtime_failure("num.nothing!!");
}

#[test]
fn truthiness_drives_conditions_and_connectives() {
    assert_value("if{\"\"} | 1 | but | 2 |\n", &Value::Number(2.0));
    assert_value("nothing implies fals!!", &Value::Bool(true));
    assert_value("not 0!!", &Value::Bool(true));
    assert_value("!(1 2)!!", &Value::Bool(false));
}

#[test]
fn loops_expose_count() {
    let src = "var sum <- 0!!\n\
               for{var i <- 1!! i <? 5!! i +<- 1} | sum +<- i |\n\
               log{sum}!!";
    assert_output(src, &["15"]);

    let src = "var values <- (1 2 3)!!\nvar picked <- ()!!\n\
               foreach{var n of values} | picked <- picked + {n + count} |\n\
               log{picked}!!";
    assert_output(src, &["(1 3 5)"]);

    let src = "var ticks <- 0!!\nwhen{ticks < 3} | ticks <- ticks + 1 |\nlog{ticks}!!";
    assert_output(src, &["3"]);

    let src = "var last <- 0!!\nloop{4} | last <- count |\nlog{last}!!";
    assert_output(src, &["3"]);
}

#[test]
fn loop_bound_is_reevaluated() {
    let src = "var bound <- 5!!\nvar runs <- 0!!\n\
               loop{bound} | runs <- runs + 1!! bound <- bound - 1 |\nlog{runs}!!";
    assert_output(src, &["3"]);
}

#[test]
fn change_dispatches_on_the_subject() {
    let src = "var n <- 2!!\n\
               change{n * 2}\n\
               | case{2} | \"two\" |\n\
                 case{4} | \"four\" |\n\
                 nocase | \"many\" |\n\
               |!!";
    assert_value(src, &Value::from("four"));

    let src = "change{9} | case{1} | \"one\" | nocase | \"other\" | |!!";
    assert_value(src, &Value::from("other"));

    assert_syntax_failure("change{1} | nocase | 2 | |!!");
}

#[test]
fn text_and_array_builtins() {
    assert_output("log{uppercase{\"abc\"} lowercase{\"DEF\"}}!!", &["ABC def"]);
    assert_value("getchar{\"sigma\" 2}!!", &Value::from("g"));
    assert_value("substring{\"sigma\" 1 4}!!", &Value::from("igm"));
    assert_value("length{\"abcd\"}!!", &Value::Number(4.0));
    assert_value("length{(1 2)}!!", &Value::Number(2.0));
    assert_value("get{(7 8 9) 1}!!", &Value::Number(8.0));
    assert_value("contains{(1 2 3) 2}!!", &Value::Bool(true));

    assert_value("add{(1 3) 1 2}!!",
                 &Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]));
    assert_value("add{(1) 1 9}!!", &Value::from(vec![Value::Number(1.0), Value::Number(9.0)]));
    assert_runtime_failure("add{(1) 2 9}!!");
    assert_runtime_failure("add{(1 2) 5}!!");

    let src = "var a <- (1 2 3)!!\nvar b <- set{a 0 9}!!\nlog{a b}!!";
    assert_output(src, &["(1 2 3) (9 2 3)"]);

    assert_runtime_failure("get{(1 2) 2}!!");
    assert_runtime_failure("sqrt{0 - 9}!!");
}

#[test]
fn unknown_names_are_reference_errors() {
    assert_reference_failure("y + 1!!");
    assert_reference_failure("frobnicate{1}!!");
    assert_runtime_failure("x <- 1!!");
}

#[test]
fn terminators_are_enforced_between_statements() {
    assert_syntax_failure("var x <- 1\nvar y <- 2!!");
    assert_success("var x <- 1!!\nvar y <- 2");
    assert_success("if{true} | var x <- 1 |");
}

#[test]
fn equals_gets_the_dedicated_hint() {
    assert_syntax_failure("var x = 5!!");
    assert_syntax_failure("var x <- 1!!\nx = 2!!");
}

#[test]
fn every_syntax_error_is_collected() {
    let report = run("var x <- 1 2!!\nvar y = 2!!\nvar z <- 3!!");
    assert!(report.syntax_errors.len() >= 2, "expected both errors: {report:?}");
    assert!(report.output.is_empty(), "nothing may run with syntax errors present");
}

#[test]
fn comments_and_multiline_text() {
    assert_output("\\ a comment\nlog{\"ok\"}!! \\. skip\nthis .\\ log{\"done\"}!!",
                  &["ok", "done"]);
    assert_value("\"a\nb\"!!", &Value::from("a\nb"));
    assert_syntax_failure("\\. never closed\nlog{1}!!");
    assert_syntax_failure("\"never closed");

    let report = run("var x <- \"ab\ncd");
    assert_eq!(report.syntax_errors[0].line(), 1, "the error points at the opening quote");
}
