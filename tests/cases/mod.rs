// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    // Pattern matching cases - detect common pattern forms
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Wildcard pattern
    ($result:expr, { _ }) => {
        // Always passes - just to ensure the expression compiles
        let _ = $result;
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // The value returned by the script
    ([$($attrs:meta)*] ($input:expr, $list:ident, $script:block) result, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_result() {
            let mut $list = seqview::Vector::from($input);
            let result = (|| -> seqview::Result<_> { $script })();
            assert_case!(result, $expected);
        }
    };

    // What the vector holds once the script has run, whatever it returned
    ([$($attrs:meta)*] ($input:expr, $list:ident, $script:block) contents, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_contents() {
            let mut $list = seqview::Vector::from($input);
            let _ = (|| -> seqview::Result<_> { $script })();
            let result = seqview::Collection::to_vec(&$list);
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $context:tt $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse $context:tt [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse $context:tt [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse $context [
            $($test_functions)*
            handle_case! {[$($attr)*] $context $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input and script second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        script: |$list:ident| $script:block,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, unused_mut, dead_code)]

            use super::*;

            // Generate all test functions
            parse_assertions! {@parse ($input, $list, $script) [] $($assertion_fields)*}
        }
    };
}
