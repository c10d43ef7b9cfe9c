#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        closure in this is OK
        r#"
        class Foo {
          getName() {
            fun closure() {
              print this.name;
            }
            return closure;
          }
        }
        var foo = Foo();
        foo.name = "Foo";
        var method = foo.getName();
        method();
        "#
        => "Foo"
    }

    tests! {
        nested_class in this is OK
        r#"
        class Outer {
          method() {
            print this;
            fun f() {
              print this;
              class Inner {
                method() {
                  print this;
                }
              }
              Inner().method();
            }
            f();
          }
        }
        Outer().method();
        "#
        => "<instance Outer>" "<instance Outer>" "<instance Inner>"
    }

    tests! {
        nested_closure in this is OK
        r#"
        class Foo {
          getClosure() {
            fun f() {
              fun g() {
                print this.name;
              }
              return g;
            }
            return f();
          }
        }
        var foo = Foo();
        foo.name = "Foo";
        var closure = foo.getClosure();
        closure();
        "#
        => "Foo"
    }

    tests! {
        this_at_top_level in this is ERR
        r#"
        print this;
        "#
        => "[line 2] Error at 'this': Cannot use 'this' outside of a class"
    }

    tests! {
        this_in_method in this is OK
        r#"
        class Foo {
          bar() {
            return this.baz;
          }
        }
        var foo = Foo();
        foo.baz = "baz";
        print foo.bar();
        "#
        => "baz"
    }

    tests! {
        this_in_top_level_function in this is ERR
        r#"
        fun notAMethod() {
          print this;
        }
        "#
        => "[line 3] Error at 'this': Cannot use 'this' outside of a class"
    }
}
