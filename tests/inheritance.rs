#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        constructor in inheritance is OK
        r#"
        class A {
            init(param) {
                this.field = param;
            }
            test() {
                print this.field;
            }
        }
        class B < A {}
        var b = B("value");
        b.test();
        "#
        => "value"
    }

    tests! {
        inherit_from_function in inheritance is ERR
        r#"
        fun Base() {}
        class Subclass < Base {}
        "#
        => "[line 3] Runtime error: Superclass must be a class."
    }

    tests! {
        inherit_from_nil in inheritance is ERR
        r#"
        var NotAClass = nil;
        class Foo < NotAClass {}
        "#
        => "[line 3] Runtime error: Superclass must be a class."
    }

    tests! {
        inherit_from_number in inheritance is ERR
        r#"
        var NotAClass = 123;
        class Foo < NotAClass {}
        "#
        => "[line 3] Runtime error: Superclass must be a class."
    }

    tests! {
        inherit_methods in inheritance is OK
        r#"
        class Foo {
            inFoo() {
                print "foo";
            }
        }
        class Bar < Foo {
            inBar() {
                print "bar";
            }
        }
        class Baz < Bar {}

        var baz = Baz();
        baz.inFoo();
        baz.inBar();
        baz.inBar();
        "#
        => "foo" "bar" "bar"
    }

    tests! {
        parenthesized_superclass in inheritance is ERR
        r#"
        class Foo {}
        class Bar < (Foo) {}
        "#
        => "[line 3] Error at '(': Expect superclass name."
    }

    tests! {
        set_fields_from_base_class in inheritance is OK
        r#"
        class Base {
            init() {
                this.foo = "foo";
                this.bar = "bar";
            }
            method() {
                print this.foo + " 1";
                print this.bar + " 2";
            }
        }

        class Derived < Base {
            method() {
                super.method();
                print this.foo + " 1";
                print this.bar + " 2";
            }
        }

        Derived().method();
        "#
        => "foo 1" "bar 2" "foo 1" "bar 2"
    }
}
