//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Rust).
    pub const RUST: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Write one indent level into `buf`.
    pub fn write_to(&self, buf: &mut String) {
        match self {
            Self::Spaces(n) => buf.extend(std::iter::repeat_n(' ', usize::from(*n))),
            Self::Tab => buf.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(indent: Indent) -> String {
        let mut buf = String::new();
        indent.write_to(&mut buf);
        buf
    }

    #[test]
    fn test_write_to() {
        assert_eq!(render(Indent::TYPESCRIPT), "  ");
        assert_eq!(render(Indent::RUST), "    ");
        assert_eq!(render(Indent::Spaces(3)), "   ");
        assert_eq!(render(Indent::Tab), "\t");
    }
}
