use std::fs;

use walkdir::WalkDir;
use zlang::{interpreter::environment::Environment, run_script};

fn assert_output(src: &str, expected: &[&str]) {
    let output = run_script(src);
    assert_eq!(output, expected, "unexpected output for script:\n{src}");
}

#[test]
fn assignment_round_trips_through_print() {
    assert_output("var x = 42;\nio.out(x);", &["42"]);
    assert_output("var msg = \"hello\";\nio.out(msg);", &["hello"]);
    assert_output("var xs = [1, 2, 3];\nio.out(xs);", &["1, 2, 3"]);
    assert_output("var f = -2.5;\nio.out(f);", &["-2.5"]);
}

#[test]
fn last_assignment_wins() {
    assert_output("var x = 1;\nvar x = 2;\nio.out(x);", &["2"]);
}

#[test]
fn conditional_runs_block_at_most_once() {
    assert_output("if true { io.out(\"yes\"); }", &["yes"]);
    assert_output("if false { io.out(\"no\"); }", &[]);
    assert_output("if TRUE { io.out(\"yes\"); }", &["yes"]);
}

#[test]
fn conditional_compares_integers() {
    assert_output("var a = 5;\nif a == 5 { io.out(\"match\"); }", &["match"]);
    assert_output("var a = 5;\nif a > 10 { io.out(\"no\"); }", &[]);
    assert_output("if 3 != 4 { io.out(\"ok\"); }", &["ok"]);
    assert_output("if 2 < 10 { io.out(\"ok\"); }", &["ok"]);
}

#[test]
fn unparseable_conditions_are_false() {
    assert_output("if maybe { io.out(\"no\"); }", &[]);
    assert_output("if 1.5 > 1 { io.out(\"no\"); }", &[]);
    assert_output("if one == 1 { io.out(\"no\"); }", &[]);
}

#[test]
fn loop_repeats_block_count_times() {
    assert_output("loop 3 { io.out(1); }", &["1", "1", "1"]);
    assert_output("loop 0 { io.out(1); }", &[]);
    assert_output("loop -1 { io.out(1); }", &[]);
}

#[test]
fn loop_count_can_come_from_a_variable() {
    assert_output("var n = 2;\nloop n { io.out(\"tick\"); }", &["tick", "tick"]);
}

#[test]
fn non_integer_loop_count_is_rejected() {
    assert_output("loop soon { io.out(1); }", &["Invalid loop count: soon"]);
    assert_output("loop 2.5 { io.out(1); }", &["Invalid loop count: 2.5"]);
}

#[test]
fn failing_iterations_do_not_stop_the_loop() {
    assert_output("loop 2 { nonsense }",
                  &["Unknown command: nonsense", "Unknown command: nonsense"]);
}

#[test]
fn functions_define_and_call() {
    assert_output("func greet() { io.out(\"hi\"); }\ngreet();", &["hi"]);
    assert_output("missing();", &["Unknown function: missing"]);
}

#[test]
fn function_redefinition_silently_replaces() {
    assert_output("func f() { io.out(1); }\nfunc f() { io.out(2); }\nf();",
                  &["2"]);
}

#[test]
fn function_bodies_see_current_variable_values() {
    assert_output("func show() { io.out(x); }\nvar x = 7;\nshow();\nvar x = 8;\nshow();",
                  &["7", "8"]);
}

#[test]
fn list_output_joins_items() {
    assert_output("io.out([1, \"a\", 3]);", &["1, a, 3"]);
    assert_output("io.out([]);", &[""]);
    assert_output("io.out([1,, 2]);", &["1, 2"]);
    assert_output("io.out([\"a, b\", c]);", &["a, b, c"]);
}

#[test]
fn unterminated_quote_keeps_items_gathered_so_far() {
    assert_output("io.out([1, \"open]);", &["1"]);
}

#[test]
fn print_boundaries() {
    assert_output("io.out();", &[""]);
    assert_output("io.out(\"\");", &[""]);
    assert_output("io.out(abc);", &["Syntax error in io.out()"]);
    assert_output("io.out(5);", &["5"]);
    assert_output("io.out(2.5);", &["2.5"]);
}

#[test]
fn resolution_replaces_inside_words() {
    // Substring replacement is not token-aware: `a` matches inside `cat`.
    assert_output("var a = 4;\nio.out(\"cat\");", &["c4t"]);
}

#[test]
fn resolution_is_idempotent_on_unrelated_text() {
    let mut env = Environment::new();
    env.set_variable("x", "1");

    assert_eq!(env.resolve("no stored names here"), "no stored names here");
    assert_eq!(env.resolve(""), "");
}

#[test]
fn blocks_end_at_the_first_closing_brace() {
    // The inner `loop` loses its `}` to the outer `if`, so the block text is
    // not a recognized statement.
    assert_output("if true { loop 2 { io.out(1); } }",
                  &["Unknown command: loop 2 { io.out(1);"]);
}

#[test]
fn control_keywords_inside_blocks_are_not_reclassified() {
    assert_output("if true { if true { io.out(1); } }",
                  &["Unknown command: if true { io.out(1);"]);
}

#[test]
fn malformed_statements_produce_one_diagnostic_each() {
    assert_output("var broken", &["Syntax error in var declaration"]);
    assert_output("func broken { io.out(1); }",
                  &["Syntax error in function definition"]);
    assert_output("func broken()", &["Syntax error in function definition"]);
    assert_output("if true io.out(1);", &["Syntax error in if statement"]);
    assert_output("loop 3 io.out(1);", &["Syntax error in loop statement"]);
    assert_output("io.out(1;", &["Syntax error in io.out()"]);
    assert_output("what is this", &["Unknown command: what is this"]);
}

#[test]
fn execution_continues_after_a_diagnostic() {
    assert_output("nope\nio.out(\"ok\");",
                  &["Unknown command: nope", "ok"]);
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.zl").expect("missing file");
    assert_output(&script,
                  &["zlang lives", "3, 2, 1", "liftoff", "liftoff", "liftoff", "done"]);
}

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "zl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        for line in run_script(&source) {
            let diagnostic = line.starts_with("Unknown command:")
                             || line.starts_with("Unknown function:")
                             || line.starts_with("Syntax error in")
                             || line.starts_with("Invalid loop count:");
            assert!(!diagnostic, "Demo {path:?} produced a diagnostic: {line}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
