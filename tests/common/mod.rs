use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Runs `f` against an in-memory sink and returns everything written to it
/// as a `String`. `print` output and diagnostics both land here, since the
/// interpreter routes both to the same sink.
pub fn capture_output<F: FnOnce(Rc<RefCell<dyn Write>>)>(f: F) -> String {
    let buffer: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    let sink: Rc<RefCell<dyn Write>> = buffer.clone();
    f(sink);
    let bytes = buffer.borrow();
    String::from_utf8(bytes.clone()).expect("interpreter output should be valid utf8")
}

/// Writes `source` to a uniquely-named temporary `.lox` file so the `ERR`
/// variant of `tests!` can drive the real `lox` binary as a subprocess
/// (needed to observe its process exit code, which the library API alone
/// can't give a test).
pub fn write_temp_script(name: &str, source: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("lox-test-{name}-{}.lox", std::process::id()));
    std::fs::write(&path, source).expect("failed to write temporary script");
    path
}

/// Declares one integration test per invocation. The `OK` form drives the
/// library directly and compares captured output; the `ERR` form shells
/// out to the compiled `lox` binary and checks both its output and its
/// (non-zero) exit code.
#[macro_export]
macro_rules! tests {
    ($name:ident in $scope:ident is OK $source:expr $(=> $($expected:expr)*)?) => {
        #[test]
        fn $name() {
            use lox_lang::Lox;

            #[allow(unused_mut)]
            let mut expected_lines: Vec<&str> = vec![$($($expected),*)?];
            let expected = if expected_lines.is_empty() {
                String::new()
            } else {
                expected_lines.push("");
                expected_lines.join("\n")
            };

            let output = $crate::common::capture_output(|sink| {
                Lox::new(sink).run_source($source);
            });

            assert_eq!(expected, output, "unexpected output for {}/{}", stringify!($scope), stringify!($name));
        }
    };

    ($name:ident in $scope:ident is ERR $source:expr => $($expected:expr)+) => {
        #[test]
        fn $name() {
            use assert_cmd::Command;

            let label = concat!(stringify!($scope), "_", stringify!($name));
            let path = $crate::common::write_temp_script(label, $source);
            let expected = vec![$($expected),+].join("\n");

            let result = Command::cargo_bin("lox")
                .unwrap()
                .arg(&path)
                .assert()
                .stdout(format!("{expected}\n"))
                .failure();

            let _ = std::fs::remove_file(&path);
            result;
        }
    };
}
