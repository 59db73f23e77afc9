//! This module contains the symbols and keywords of the surface language.
//! These constants are used when we prettyprint source code.

// Symbols
//
//

/// The symbol `->`
pub const ARROW: &str = "->";

/// The symbol `,`
pub const COMMA: &str = ",";

/// The symbol `:`
pub const COLON: &str = ":";

/// The symbol `;`
pub const SEMI: &str = ";";

/// The symbol `.`
pub const DOT: &str = ".";

/// The symbol `=`
pub const EQ: &str = "=";

/// The symbol `:=`
pub const COLONEQ: &str = ":=";

/// The symbol `_`
pub const UNDERSCORE: &str = "_";

// Keywords
//
//

/// The keyword `visitor`
pub const VISITOR: &str = "visitor";

/// The keyword `before`
pub const BEFORE: &str = "before";

/// The keyword `after`
pub const AFTER: &str = "after";

/// The keyword `switch`
pub const SWITCH: &str = "switch";

/// The keyword `case`
pub const CASE: &str = "case";

/// The keyword `default`
pub const DEFAULT: &str = "default";

/// The keyword `if`
pub const IF: &str = "if";

/// The keyword `else`
pub const ELSE: &str = "else";

/// The keyword `return`
pub const RETURN: &str = "return";

/// The keyword `function`
pub const FUNCTION: &str = "function";

/// The keyword `true`
pub const TRUE: &str = "true";

/// The keyword `false`
pub const FALSE: &str = "false";
