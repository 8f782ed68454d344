/// A ternary expression handler.  Rust's `if` is already an
/// expression, but `cargo fmt` insists on breaking it across four
/// lines, and the column-clamping tables at the grid borders read much
/// better as single lines.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
