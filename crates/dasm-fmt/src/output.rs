//! Formatter output sink.

/// Classifies a text fragment pushed to a [`FormatterOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterTextKind {
    /// Anything without a more specific kind.
    Text,
    /// An instruction prefix (`lock`, `rep`, segment override).
    Prefix,
    Mnemonic,
    Register,
    Number,
    /// Separators: commas, brackets, colons.
    Punctuation,
    /// `+`, `-`, `*` inside a memory operand.
    Operator,
    /// `{k1}`, `{z}`, broadcast and rounding decorators.
    Decorator,
    /// Size and branch keywords (`dword ptr`, `short`).
    Keyword,
    /// A resolved symbol name.
    Symbol,
}

/// Consumer of formatted text.
///
/// Implementors only have to provide [`write`](Self::write); the fine-grained
/// methods forward to it by default and exist so renderers (a colorizer, a
/// hyperlinking UI) can intercept specific fragment kinds.
pub trait FormatterOutput {
    /// Receives one fragment.
    fn write(&mut self, text: &str, kind: FormatterTextKind);

    fn write_prefix(&mut self, text: &str) {
        self.write(text, FormatterTextKind::Prefix);
    }

    fn write_mnemonic(&mut self, text: &str) {
        self.write(text, FormatterTextKind::Mnemonic);
    }

    fn write_register(&mut self, text: &str) {
        self.write(text, FormatterTextKind::Register);
    }

    fn write_number(&mut self, text: &str) {
        self.write(text, FormatterTextKind::Number);
    }

    fn write_decorator(&mut self, text: &str) {
        self.write(text, FormatterTextKind::Decorator);
    }

    fn write_symbol(&mut self, text: &str) {
        self.write(text, FormatterTextKind::Symbol);
    }
}

/// Plain accumulation into a string, dropping the kinds.
impl FormatterOutput for String {
    fn write(&mut self, text: &str, _kind: FormatterTextKind) {
        self.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_concatenates() {
        let mut s = String::new();
        s.write_mnemonic("mov");
        s.write(" ", FormatterTextKind::Text);
        s.write_register("eax");
        assert_eq!(s, "mov eax");
    }

    #[test]
    fn custom_sink_sees_kinds() {
        struct Collector(Vec<(String, FormatterTextKind)>);
        impl FormatterOutput for Collector {
            fn write(&mut self, text: &str, kind: FormatterTextKind) {
                self.0.push((text.to_string(), kind));
            }
        }
        let mut c = Collector(Vec::new());
        c.write_register("rax");
        c.write_number("1");
        assert_eq!(c.0[0].1, FormatterTextKind::Register);
        assert_eq!(c.0[1].1, FormatterTextKind::Number);
    }
}
