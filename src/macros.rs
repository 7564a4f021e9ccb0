/// Declare built-in icons
///
/// Each entry expands to a `pub static NAME: LazyLock<Icon>` created through
/// [`create_icon`](crate::create_icon) on first use. Aliases listed after
/// `as` are `pub use` re-exports of that static, so every name refers to the
/// same value. The macro also emits `ALL` (every icon, catalog order) and
/// `ALIASES` (`(alias, canonical)` name pairs).
///
/// ```ignore
/// icons! {
///     SQUARE_PEN = "SquarePen" [
///         path { d: "M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7" },
///     ] as EDIT = "Edit", PEN_BOX = "PenBox";
/// }
/// ```
macro_rules! icons {
    (
        $(
            $ident:ident = $name:literal [
                $( $tag:ident { $( $attr:ident : $value:literal ),* $(,)? } ),* $(,)?
            ] $( as $( $alias:ident = $alias_name:literal ),+ )? ;
        )*
    ) => {
        $(
            #[doc = concat!("The `", $name, "` icon")]
            pub static $ident: ::std::sync::LazyLock<$crate::icon::Icon> =
                ::std::sync::LazyLock::new(|| {
                    $crate::icon::create_icon(
                        $name,
                        $crate::node::IconNode::from_pairs(&[
                            $(
                                (
                                    stringify!($tag),
                                    &[ $( (stringify!($attr), $value) ),* ] as &[(&str, &str)],
                                )
                            ),*
                        ]),
                    )
                });

            $( $(
                #[doc = concat!("Alias of [`", stringify!($ident), "`] (`", $alias_name, "`)")]
                pub use self::$ident as $alias;
            )+ )?
        )*

        /// Every built-in icon, in catalog order
        pub static ALL: &[&::std::sync::LazyLock<$crate::icon::Icon>] = &[ $( &$ident ),* ];

        /// Every alias as `(alias name, canonical name)`
        pub static ALIASES: &[(&str, &str)] = &[ $( $( $( ($alias_name, $name), )+ )? )* ];
    };
}
