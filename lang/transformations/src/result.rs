use miette::{Diagnostic, SourceSpan};
use shade_lang_ast::shadow::LookupError;
use shade_lang_miette_util::ToMiette;
use shade_lang_miette_util::codespan::Span;
use thiserror::Error;

pub type ErasureResult<T = ()> = Result<T, Box<ErasureError>>;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ErasureError {
    #[error("Shadow type {shadow} has no field named {field}")]
    #[diagnostic(code("E-001"))]
    UnknownShadowField {
        field: String,
        shadow: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("An unexpected internal error occurred: {message}")]
    #[diagnostic(code("E-XXX"))]
    /// This error should not occur.
    /// Some internal invariant has been violated.
    Impossible {
        message: String,
        #[label]
        span: Option<SourceSpan>,
    },
}

impl ErasureError {
    pub(crate) fn impossible(message: impl Into<String>, span: Option<Span>) -> Box<Self> {
        Box::new(ErasureError::Impossible { message: message.into(), span: span.to_miette() })
    }

    pub(crate) fn lookup(err: LookupError, span: Option<Span>) -> Box<Self> {
        match err {
            LookupError::UnknownField { field, shadow } => {
                Box::new(ErasureError::UnknownShadowField { field, shadow, span: span.to_miette() })
            }
        }
    }
}
