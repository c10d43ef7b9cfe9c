#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        bool in call is ERR
        "true();"
        => "[line 1] Runtime error: Can only call functions and classes."
    }

    tests! {
        nil in call is ERR
        "nil();"
        => "[line 1] Runtime error: Can only call functions and classes."
    }

    tests! {
        num in call is ERR
        "123();"
        => "[line 1] Runtime error: Can only call functions and classes."
    }

    tests! {
        object in call is ERR
        r#"
        class Foo {}
        var foo = Foo();
        foo();
        "#
        => "[line 4] Runtime error: Can only call functions and classes."
    }

    tests! {
        string in call is ERR
        "\"str\"();"
        => "[line 1] Runtime error: Can only call functions and classes."
    }
}
