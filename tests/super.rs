#[macro_use]
mod common;

#[cfg(test)]
mod _super {
    tests! {
        bound_method in super is OK
        r#"
        class A {
          method(arg) {
            print "A.method(" + arg + ")";
          }
        }
        class B < A {
          getClosure() {
            return super.method;
          }
          method(arg) {
            print "B.method(" + arg + ")";
          }
        }
        var closure = B().getClosure();
        closure("arg");
        "#
        => "A.method(arg)"
    }

    tests! {
        call_other_method in super is OK
        r#"
        class Base {
          foo() {
            print "Base.foo()";
          }
        }
        class Derived < Base {
          bar() {
            print "Derived.bar()";
            super.foo();
          }
        }
        Derived().bar();
        "#
        => "Derived.bar()" "Base.foo()"
    }

    tests! {
        call_same_method in super is OK
        r#"
        class Base {
          foo() {
            print "Base.foo()";
          }
        }
        class Derived < Base {
          foo() {
            print "Derived.foo()";
            super.foo();
          }
        }
        Derived().foo();
        "#
        => "Derived.foo()" "Base.foo()"
    }

    tests! {
        closure in super is OK
        r#"
        class Base {
          toString() {
            return "Base";
          }
        }
        class Derived < Base {
          getClosure() {
            fun closure() {
              return super.toString();
            }
            return closure;
          }
          toString() {
            return "Derived";
          }
        }
        var closure = Derived().getClosure();
        print closure();
        "#
        => "Base"
    }

    tests! {
        constructor in super is OK
        r#"
        class Base {
          init(a, b) {
            print "Base.init(" + a + ", " + b + ")";
          }
        }
        class Derived < Base {
          init() {
            print "Derived.init()";
            super.init("a", "b");
          }
        }
        Derived();
        "#
        => "Derived.init()" "Base.init(a, b)"
    }

    tests! {
        extra_arguments in super is ERR
        r#"
        class Base {
          foo(a, b) {
            print "Base.foo(" + a + ", " + b + ")";
          }
        }
        class Derived < Base {
          foo() {
            super.foo(1, 2, 3, 4);
          }
        }
        Derived().foo();
        "#
        => "[line 9] Error at ')': Expected 2 arguments but got 4."
    }

    tests! {
        indirectly_inherited in super is OK
        r#"
        class A {
          foo() {
            print "A.foo()";
          }
        }
        class B < A {}
        class C < B {
          foo() {
            print "C.foo()";
            super.foo();
          }
        }
        C().foo();
        "#
        => "C.foo()" "A.foo()"
    }

    tests! {
        missing_arguments in super is ERR
        r#"
        class Base {
          foo(a, b) {
            print "Base.foo(" + a + ", " + b + ")";
          }
        }
        class Derived < Base {
          foo() {
            super.foo(1);
          }
        }
        Derived().foo();
        "#
        => "[line 9] Error at ')': Expected 2 arguments but got 1."
    }

    tests! {
        no_superclass_bind in super is ERR
        r#"
        class Base {
          foo() {
            super.foo;
          }
        }
        Base().foo();
        "#
        => "[line 4] Error at 'super': Cannot use 'super' in a class with no superclass"
    }

    tests! {
        no_superclass_call in super is ERR
        r#"
        class Base {
          foo() {
            super.foo();
          }
        }
        Base().foo();
        "#
        => "[line 4] Error at 'super': Cannot use 'super' in a class with no superclass"
    }

    tests! {
        no_superclass_method in super is ERR
        r#"
        class Base {}
        class Derived < Base {
          foo() {
            super.doesNotExist();
          }
        }
        Derived().foo();
        "#
        => "[line 5] Error at 'doesNotExist': Undefined property 'doesNotExist'."
    }

    tests! {
        parenthesized in super is ERR
        r#"
        class Base {}
        class Derived < Base {
          foo() {
            super(1, 2);
          }
        }
        "#
        => "[line 5] Error at '(': Expect '.' after 'super'."
    }

    tests! {
        reassign_superclass in super is OK
        r#"
        class Base {
          method() {
            print "Base.method()";
          }
        }
        class Derived < Base {
          method() {
            super.method();
          }
        }
        var base = Base;
        Derived().method();
        base = "something else";
        Derived().method();
        "#
        => "Base.method()" "Base.method()"
    }

    tests! {
        super_at_top_level in super is ERR
        r#"
        super.foo();
        super.foo;
        "#
        => "[line 2] Error at 'super': Cannot use 'super' outside of a class"
           "[line 3] Error at 'super': Cannot use 'super' outside of a class"
    }

    tests! {
        super_in_closure_in_inherited_method in super is OK
        r#"
        class A {
          say() {
            return "A";
          }
        }
        class B < A {
          getClosure() {
            fun closure() {
              return super.say();
            }
            return closure;
          }
          say() {
            return "B";
          }
        }
        print B().getClosure()();
        "#
        => "A"
    }

    tests! {
        super_in_inherited_method in super is OK
        r#"
        class A {
          say() {
            return "A";
          }
        }
        class B < A {
          test() {
            return super.say();
          }
          say() {
            return "B";
          }
        }
        print B().test();
        "#
        => "A"
    }

    tests! {
        super_in_top_level_function in super is ERR
        r#"
        fun notAClass() {
          super.foo();
        }
        "#
        => "[line 3] Error at 'super': Cannot use 'super' outside of a class"
    }

    tests! {
        super_without_dot in super is ERR
        r#"
        class Base {}
        class Derived < Base {
          foo() {
            super;
          }
        }
        "#
        => "[line 5] Error at ';': Expect '.' after 'super'."
    }

    tests! {
        super_without_name in super is ERR
        r#"
        class Base {}
        class Derived < Base {
          foo() {
            super.;
          }
        }
        "#
        => "[line 5] Error at ';': Expect superclass method name."
    }

    tests! {
        this_in_superclass_method in super is OK
        r#"
        class Base {
          init(a) {
            this.a = a;
          }
          getA() {
            return this.a;
          }
        }
        class Derived < Base {
          init(a, b) {
            super.init(a);
            this.b = b;
          }
          getB() {
            return this.b;
          }
        }
        var derived = Derived("a", "b");
        print derived.getA();
        print derived.getB();
        "#
        => "a" "b"
    }
}
