// See https://stackoverflow.com/questions/34662713/how-can-i-create-parameterized-tests-in-rust
macro_rules! with_dollar_sign {
    ($($body:tt)*) => {
        macro_rules! __with_dollar_sign { $($body)* }
        __with_dollar_sign!($);
    }
}

#[macro_export]
macro_rules! parameterized_test {
    ($name:ident, $args:pat, $body:tt) => {
        with_dollar_sign! {
        ($d:tt) => {
            macro_rules! $name {
                ($d($d pname:ident: $d values:expr,)*) => {
                    mod $name {
                        use super::*;
                        $d(
                            #[test]
                            fn $d pname() {
                                let $args = $d values;
                                $body
                            }
                        )*
                    }}}}}
    };
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1E-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right) = ($left, $right);
        if !$crate::utils::is_close(left, right, $tolerance) {
            panic!(
                "assertion failed: `(left ~= right)`\n  left: `{}`,\n right: `{}`,\n tolerance: `{}`",
                left, right, $tolerance
            )
        }
    }};
}
