//! Declaration helpers for flag-producing options
//!
//! Each macro expands one flag declaration into a public function, keeping the
//! attached doc comment:
//!
//! - `toggle!`: `fn(&mut Command)` appending a fixed literal
//! - `valued!`: `fn(value) -> impl Fn(&mut Command)` appending `--flag=value`,
//!   or the bare `--flag` when the value renders empty

macro_rules! toggle {
    ($(#[$meta:meta])* $name:ident => $flag:literal) => {
        $(#[$meta])*
        pub fn $name(cmd: &mut $crate::artifacts::command::Command) {
            cmd.add_option($flag);
        }
    };
}

macro_rules! valued {
    ($(#[$meta:meta])* $name:ident($value:ident) => $flag:literal) => {
        $(#[$meta])*
        pub fn $name(
            $value: impl ::std::fmt::Display,
        ) -> impl Fn(&mut $crate::artifacts::command::Command) {
            let $value = $value.to_string();
            let option = if $value.is_empty() {
                $flag.to_string()
            } else {
                format!(concat!($flag, "={}"), $value)
            };
            move |cmd: &mut $crate::artifacts::command::Command| {
                cmd.add_option(option.as_str());
            }
        }
    };
}

pub(crate) use toggle;
pub(crate) use valued;
