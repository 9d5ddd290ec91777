use super::run;

#[test]
fn sum_of_two_pushes() {
    run("PUSH 5 PUSH 3 SUM #r PRINT #r EXIT", &[], &["8"]);
}

#[test]
fn sub_is_order_sensitive() {
    // Earlier-pushed minus later-pushed.
    run("PUSH 10 PUSH 4 SUB #r PRINT #r EXIT", &[], &["6"]);
    run("PUSH 4 PUSH 10 SUB #r PRINT #r EXIT", &[], &["-6"]);
}

#[test]
fn print_text() {
    run("PRINT hello EXIT", &[], &["hello"]);
}

#[test]
fn print_numeric_literal() {
    run("PRINT 42 EXIT", &[], &["42"]);
}

#[test]
fn read_feeds_the_stack() {
    run("PUSH 3 READ SUM #r PRINT #r EXIT", &["7"], &["10"]);
}

#[test]
fn read_twice() {
    run("READ READ SUB #r PRINT #r EXIT", &["8", "5"], &["3"]);
}

#[test]
fn negative_literals() {
    run("PUSH -2 PUSH 5 SUM #r PRINT #r EXIT", &[], &["3"]);
}

#[test]
fn unwritten_variable_prints_zero() {
    run("PRINT #x EXIT", &[], &["0"]);
}

#[test]
fn recomputed_variable_keeps_its_last_value() {
    run(
        "PUSH 1 PUSH 2 SUM #a PRINT #a PUSH 10 PUSH 20 SUM #a PRINT #a EXIT",
        &[],
        &["3", "30"],
    );
}

#[test]
fn mentioning_a_variable_again_does_not_reset_it() {
    run("PUSH 1 PUSH 2 SUM #a PRINT #a PRINT #a EXIT", &[], &["3", "3"]);
}

#[test]
fn pop_discards_before_the_next_sum() {
    run("PUSH 1 PUSH 2 POP PUSH 3 SUM #r PRINT #r EXIT", &[], &["4"]);
}

#[test]
fn tokens_flow_across_lines() {
    run(
        "PUSH 5\nPUSH 3\nSUM #r\n\nPRINT #r\nEXIT\n",
        &[],
        &["8"],
    );
}

#[test]
fn exit_stops_the_program() {
    run("PRINT one EXIT PRINT two", &[], &["one"]);
}
