#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file in misc is OK
        ""
    }

    tests! {
        precedence in misc is OK
        r#"
        print 2 + 3 * 4;
        print 2 * 3 + 4;
        print (2 + 3) * 4;
        print (2 - 3 - 4);
        print 1 < 2 == 3 < 4;
        print !true == false;
        print 2 + 2 == 4;
        print !(2 == 3);
        print -2 + 4;
        print -(2 + 4) + 8;
        "#
        => "14" "10" "20" "-5" "true" "true" "true" "true" "2" "2"
    }

    tests! {
        unexpected_character in misc is ERR
        r#"
        print 1;
        print |2;
        "#
        => "[line 3] Error: Unexpected character '|'" "[line 3] Error: Expect expression."
    }
}
