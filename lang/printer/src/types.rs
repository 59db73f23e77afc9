/// Semantic annotations attached to printed text, interpreted by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anno {
    Keyword,
    Type,
    Identifier,
    Literal,
}

pub type Alloc<'a> = pretty::Arena<'a, Anno>;
pub type Builder<'a> = pretty::DocBuilder<'a, Alloc<'a>, Anno>;

pub trait Print<'a> {
    fn print(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a>;
}

/// Entities which can only be printed together with the structure they point into,
/// e.g. arena indices.
pub trait PrintInCtx<'a> {
    type Ctx;

    fn print_in_ctx(&'a self, cfg: &PrintCfg, ctx: &'a Self::Ctx, alloc: &'a Alloc<'a>)
    -> Builder<'a>;
}

pub struct PrintCfg {
    /// The width of the output terminal/device, used for the insertion of linebreaks.
    pub width: usize,
    /// Number of spaces per indentation level
    pub indent: isize,
}

impl Default for PrintCfg {
    fn default() -> Self {
        Self { width: crate::DEFAULT_WIDTH, indent: 4 }
    }
}
