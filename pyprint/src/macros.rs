//! print 宏

/// 打印任意个 `Display` 值，可选地在 `;` 后给出选项
///
/// 支持的选项：`sep`/`separator`、`end`/`terminator`、`file`/`target`、`flush`。
///
/// ```no_run
/// use pyprint::pyprint;
///
/// pyprint!("Hello", "World")?;
/// pyprint!("A", "B", "C"; sep = "-")?;
/// pyprint!("Hello"; end = "!!!", flush = true)?;
/// pyprint!(; file = "out.txt")?;
/// # Ok::<(), pyprint::PrintError>(())
/// ```
#[macro_export]
macro_rules! pyprint {
    ($($value:expr),* ; $($key:ident = $opt:expr),+ $(,)?) => {{
        let options = $crate::PrintOptions::default();
        $( let options = $crate::__with_option!(options, $key, $opt); )+
        $crate::print::<&[&dyn ::core::fmt::Display]>(&[$(&$value),*], &options)
    }};
    ($($value:expr),* $(,)?) => {
        $crate::print::<&[&dyn ::core::fmt::Display]>(
            &[$(&$value),*],
            &$crate::PrintOptions::default(),
        )
    };
}

/// 内部使用：把宏里的选项名映射到构造方法
#[doc(hidden)]
#[macro_export]
macro_rules! __with_option {
    ($options:ident, sep, $value:expr) => {
        $options.with_separator($value)
    };
    ($options:ident, separator, $value:expr) => {
        $options.with_separator($value)
    };
    ($options:ident, end, $value:expr) => {
        $options.with_terminator($value)
    };
    ($options:ident, terminator, $value:expr) => {
        $options.with_terminator($value)
    };
    ($options:ident, file, $value:expr) => {
        $options.with_target($value)
    };
    ($options:ident, target, $value:expr) => {
        $options.with_target($value)
    };
    ($options:ident, flush, $value:expr) => {
        $options.with_flush($value)
    };
}
