use pretty::DocAllocator;

use super::types::*;

pub trait ThemeExt<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a>;
    fn typ(&'a self, text: &'a str) -> Builder<'a>;
    fn ident(&'a self, text: &'a str) -> Builder<'a>;
    fn literal(&'a self, text: String) -> Builder<'a>;
}

impl<'a> ThemeExt<'a> for Alloc<'a> {
    fn keyword(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Keyword)
    }

    fn typ(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Type)
    }

    fn ident(&'a self, text: &'a str) -> Builder<'a> {
        self.text(text).annotate(Anno::Identifier)
    }

    fn literal(&'a self, text: String) -> Builder<'a> {
        self.text(text).annotate(Anno::Literal)
    }
}
