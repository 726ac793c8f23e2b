use core::fmt;

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

/// The label a line is printed with.
#[derive(Clone, Copy)]
pub(crate) enum Level {
    Info,
    Warn,
    Error,
    Blank,
}

impl Level {
    fn label(self) -> Option<(Color, &'static str)> {
        match self {
            Level::Warn => Some((Color::Yellow, "warning:")),
            Level::Error => Some((Color::Red, "error:")),
            Level::Info | Level::Blank => None,
        }
    }
}

/// Line-oriented output with indentation.
pub(crate) struct Out<'a> {
    o: &'a mut dyn WriteColor,
    indent: usize,
}

impl<'a> Out<'a> {
    #[inline]
    pub(crate) fn new(o: &'a mut dyn WriteColor) -> Self {
        Self { o, indent: 0 }
    }

    /// Construct a nested output indented by `n` additional levels.
    pub(crate) fn indent(&mut self, n: usize) -> Out<'_> {
        Out {
            o: &mut *self.o,
            indent: self.indent + n,
        }
    }

    pub(crate) fn write(&mut self, level: Level, args: fmt::Arguments<'_>) -> io::Result<()> {
        for _ in 0..self.indent {
            self.o.write_all(b"  ")?;
        }

        if let Some((color, label)) = level.label() {
            self.o
                .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            self.o.write_all(label.as_bytes())?;
            self.o.reset()?;
            self.o.write_all(b" ")?;
        }

        self.o.write_fmt(args)?;
        self.o.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered output, used before handing the terminal to a child
    /// process.
    #[inline]
    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.o.flush()
    }
}

macro_rules! info {
    ($o:expr, $($arg:tt)*) => {
        $o.write($crate::out::Level::Info, format_args!($($arg)*))?
    };
}

macro_rules! warning {
    ($o:expr, $($arg:tt)*) => {
        $o.write($crate::out::Level::Warn, format_args!($($arg)*))?
    };
}

macro_rules! error {
    ($o:expr, $($arg:tt)*) => {
        $o.write($crate::out::Level::Error, format_args!($($arg)*))?
    };
}

macro_rules! blank {
    ($o:expr, $($arg:tt)*) => {
        $o.write($crate::out::Level::Blank, format_args!($($arg)*))?
    };
}

pub(crate) use {blank, error, info, warning};
