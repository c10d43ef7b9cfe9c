#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        add in operator is OK
        r#"
        print 123 + 456;
        print "str" + "ing";
        "#
        => "579" "string"
    }

    tests! {
        add_mismatched_types in operator is ERR
        r#"
        print "str" + 1;
        "#
        => "[line 2] Runtime error: Operands must be two numbers or two strings."
    }

    tests! {
        comparison in operator is OK
        r#"
        print 1 < 2;
        print 2 < 2;
        print 2 < 1;
        print 1 <= 2;
        print 2 <= 2;
        print 2 <= 1;
        print 1 > 2;
        print 2 > 2;
        print 2 > 1;
        print 1 >= 2;
        print 2 >= 2;
        print 2 >= 1;
        "#
        => "true" "false" "false" "true" "true" "false" "false" "false" "true" "false" "true" "true"
    }

    tests! {
        comparison_mismatched_types in operator is ERR
        r#"
        print "str" < 1;
        "#
        => "[line 2] Runtime error: Operands must be numbers."
    }

    tests! {
        divide in operator is OK
        r#"
        print 8 / 2;
        print 12.34 / 12.34;
        "#
        => "4" "1"
    }

    tests! {
        divide_by_zero in operator is ERR
        r#"
        print 1 / 0;
        "#
        => "[line 2] Runtime error: Divided by zero."
    }

    tests! {
        divide_promotes_to_float in operator is OK
        r#"
        print 5 / 2;
        "#
        => "2.5"
    }

    tests! {
        divide_mismatched_types in operator is ERR
        r#"
        print "str" / 2;
        "#
        => "[line 2] Runtime error: Operands must be numbers."
    }

    tests! {
        equals in operator is OK
        r#"
        print 1 == 1;
        print 1 == 2;
        print "str" == "str";
        print "str" == "ing";
        print nil == nil;
        print nil == false;
        print 1 == "1";
        "#
        => "true" "false" "true" "false" "true" "false" "false"
    }

    tests! {
        equals_class in operator is OK
        r#"
        class Foo {}
        class Bar {}
        print Foo == Foo;
        print Foo == Bar;
        print Foo() == Foo();
        var foo = Foo();
        print foo == foo;
        "#
        => "true" "false" "false" "true"
    }

    tests! {
        integer_overflow_promotes_to_float in operator is OK
        r#"
        print 9223372036854775807 + 1;
        "#
        => "9223372036854775808"
    }

    tests! {
        multiply in operator is OK
        r#"
        print 5 * 3;
        print 2.5 * 2;
        "#
        => "15" "5"
    }

    tests! {
        multiply_mismatched_types in operator is ERR
        r#"
        print nil * 2;
        "#
        => "[line 2] Runtime error: Operands must be numbers."
    }

    tests! {
        negate in operator is OK
        r#"
        print -3;
        print --3;
        print ---3;
        "#
        => "-3" "3" "-3"
    }

    tests! {
        negate_non_number in operator is ERR
        r#"
        print -"str";
        "#
        => "[line 2] Runtime error: Operand must be a number."
    }

    tests! {
        negate_nil in operator is ERR
        r#"
        print -nil;
        "#
        => "[line 2] Runtime error: Operand must be a number."
    }

    tests! {
        not in operator is OK
        r#"
        print !true;
        print !false;
        print !!true;
        print !123;
        print !"str";
        print !nil;
        "#
        => "false" "true" "true" "false" "false" "true"
    }

    tests! {
        not_equals in operator is OK
        r#"
        print 1 != 1;
        print 1 != 2;
        print "str" != "str";
        print "str" != "ing";
        print nil != nil;
        "#
        => "false" "true" "false" "true" "false"
    }

    tests! {
        not_instance_is_truthy in operator is OK
        r#"
        class Foo {}
        print !Foo();
        "#
        => "false"
    }

    tests! {
        subtract in operator is OK
        r#"
        print 4 - 3;
        print 1.5 - 1.5;
        "#
        => "1" "0"
    }

    tests! {
        subtract_mismatched_types in operator is ERR
        r#"
        print true - 1;
        "#
        => "[line 2] Runtime error: Operands must be numbers."
    }
}
