/// Declares a bitset newtype with named single-bit constants.
///
/// `contains` tests that **all** bits of the mask are present; use
/// `intersects` for "any bit".
macro_rules! flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $repr:ty {
            $(
                $(#[$flag_meta:meta])*
                const $flag:ident = $bit:expr;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name($repr);

        impl $name {
            $(
                $(#[$flag_meta])*
                pub const $flag: Self = Self(1 << $bit);
            )*

            const NAMED: &'static [(&'static str, $name)] = &[
                $( (stringify!($flag), Self::$flag), )*
            ];

            pub const fn empty() -> Self {
                Self(0)
            }

            pub const fn all() -> Self {
                Self(0 $( | (1 << $bit) )*)
            }

            pub const fn bits(self) -> $repr {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns `true` if every bit of `mask` is set in `self`.
            pub const fn contains(self, mask: Self) -> bool {
                self.0 & mask.0 == mask.0
            }

            /// Returns `true` if at least one bit of `mask` is set in `self`.
            pub const fn intersects(self, mask: Self) -> bool {
                self.0 & mask.0 != 0
            }

            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            /// Iterates the single-bit flags set in `self`, in declaration order.
            pub fn iter(self) -> impl Iterator<Item = Self> {
                Self::NAMED
                    .iter()
                    .map(|(_, flag)| *flag)
                    .filter(move |flag| self.contains(*flag))
            }

            /// Looks up a single-bit flag by its constant name, case-insensitively.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::NAMED
                    .iter()
                    .find(|(flag_name, _)| flag_name.eq_ignore_ascii_case(name))
                    .map(|(_, flag)| *flag)
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(stringify!($name))?;
                f.write_str("(")?;
                let mut first = true;
                for (flag_name, flag) in Self::NAMED {
                    if self.contains(*flag) {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        f.write_str(flag_name)?;
                        first = false;
                    }
                }
                f.write_str(")")
            }
        }
    };
}
