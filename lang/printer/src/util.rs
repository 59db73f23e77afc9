use pretty::DocAllocator;

use super::tokens::COMMA;
use super::types::*;

pub trait BlockExt<'a> {
    /// Print `items` between braces, one item per line.
    ///
    /// An empty block is printed as `{}`. Blocks never collapse onto a
    /// single line, so the output does not depend on the configured width.
    fn block(&'a self, cfg: &PrintCfg, items: Vec<Builder<'a>>) -> Builder<'a>;

    /// Print `items` separated by commas, e.g. call arguments.
    fn comma_sep(&'a self, items: Vec<Builder<'a>>) -> Builder<'a>;
}

impl<'a> BlockExt<'a> for Alloc<'a> {
    fn block(&'a self, cfg: &PrintCfg, items: Vec<Builder<'a>>) -> Builder<'a> {
        if items.is_empty() {
            return self.text("{}");
        }
        self.hardline()
            .append(self.intersperse(items, self.hardline()))
            .nest(cfg.indent)
            .append(self.hardline())
            .braces()
    }

    fn comma_sep(&'a self, items: Vec<Builder<'a>>) -> Builder<'a> {
        self.intersperse(items, self.text(COMMA).append(self.space()))
    }
}

#[cfg(test)]
mod util_tests {
    use crate::PrintCfg;

    use super::*;

    #[test]
    fn empty_block() {
        let alloc = Alloc::new();
        let doc = alloc.block(&PrintCfg::default(), vec![]);
        assert_eq!(doc.1.pretty(80).to_string(), "{}");
    }

    #[test]
    fn block_breaks_lines() {
        let alloc = Alloc::new();
        let doc = alloc.block(&PrintCfg::default(), vec![alloc.text("a;"), alloc.text("b;")]);
        assert_eq!(doc.1.pretty(80).to_string(), "{\n    a;\n    b;\n}");
    }

    #[test]
    fn comma_separated() {
        let alloc = Alloc::new();
        let doc = alloc.comma_sep(vec![alloc.text("x"), alloc.text("y")]);
        assert_eq!(doc.1.pretty(80).to_string(), "x, y");
    }
}
