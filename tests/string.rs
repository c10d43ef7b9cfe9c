#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literals in string is OK
        r#"
        print "()";
        print "a string";
        print "A~¶Þॐஃ";
        "#
        => "()" "a string" "A~¶Þॐஃ"
    }

    // The opening quote is indented but the embedded newlines are not, so the
    // literal's payload (taken verbatim between the quotes) is exactly "1\n2\n3".
    tests! {
        multiline in string is OK
        "
        var a = \"1
2
3\";
        print a;
        "
        => "1" "2" "3"
    }

    // A multiline string's embedded newlines must still advance the line
    // counter, so the undefined-variable error below reports the right line.
    tests! {
        error_after_multiline in string is ERR
        "
        var a = \"1
2
3\";
        err;
        "
        => "[line 5] Runtime error: Undefined variable 'err'."
    }

    tests! {
        unterminated in string is ERR
        "\"oops"
        => "[line 1] Error: Unterminated string"
    }
}
