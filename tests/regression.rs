#[macro_use]
mod common;

#[cfg(test)]
mod regression {
    tests! {
        b394 in regression is OK
        r#"
        class A {
          method() {
            print "A method";
          }
        }
        class B < A {
          method() {
            var closure = super.method;
            closure();
          }
        }
        B().method();
        print B;
        "#
        => "A method" "<class B>"
    }

    tests! {
        b40 in regression is OK
        r#"
        fun f() {}
        print f;
        "#
        => "<function f>"
    }
}
