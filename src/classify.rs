//! Keyword and built-in function classification.
//!
//! Both lookups upper-case the candidate first: DAX is case-insensitive
//! for reserved words and function names alike.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::token::TokenKind;

/// Reserved query keywords.
pub const KEYWORDS: &[&str] = &[
    "DEFINE", "MEASURE", "EVALUATE", "ORDER", "BY", "START", "AT", "ASC", "DESC", "RETURN",
];

/// Built-in function names, upper-cased.
pub const FUNCTIONS: &[&str] = &[
    // date and time
    "CALENDAR", "CALENDARAUTO", "DATE", "DATEDIFF", "DATEVALUE", "DAY", "EDATE", "EOMONTH",
    "HOUR", "MINUTE", "MONTH", "NOW", "QUARTER", "SECOND", "TIME", "TIMEVALUE", "TODAY",
    "WEEKDAY", "WEEKNUM", "YEAR", "YEARFRAC",
    // time intelligence
    "CLOSINGBALANCEMONTH", "CLOSINGBALANCEQUARTER", "CLOSINGBALANCEYEAR", "DATEADD",
    "DATESBETWEEN", "DATESINPERIOD", "DATESMTD", "DATESQTD", "DATESYTD", "ENDOFMONTH",
    "ENDOFQUARTER", "ENDOFYEAR", "FIRSTDATE", "FIRSTNONBLANK", "LASTDATE", "LASTNONBLANK",
    "NEXTDAY", "NEXTMONTH", "NEXTQUARTER", "NEXTYEAR", "OPENINGBALANCEMONTH",
    "OPENINGBALANCEQUARTER", "OPENINGBALANCEYEAR", "PARALLELPERIOD", "PREVIOUSDAY",
    "PREVIOUSMONTH", "PREVIOUSQUARTER", "PREVIOUSYEAR", "SAMEPERIODLASTYEAR", "STARTOFMONTH",
    "STARTOFQUARTER", "STARTOFYEAR", "TOTALMTD", "TOTALQTD", "TOTALYTD",
    // filter
    "ADDMISSINGITEMS", "ALL", "ALLCROSSFILTERED", "ALLEXCEPT", "ALLNOBLANKROW", "ALLSELECTED",
    "CALCULATE", "CALCULATETABLE", "CROSSFILTER", "DISTINCT", "EARLIER", "EARLIEST", "FILTER",
    "FILTERS", "HASONEFILTER", "HASONEVALUE", "ISCROSSFILTERED", "ISFILTERED", "KEEPFILTERS",
    "RELATED", "RELATEDTABLE", "REMOVEFILTERS", "SELECTEDVALUE", "SUBSTITUTEWITHINDEX",
    "USERELATIONSHIP", "VALUES",
    // information
    "CONTAINS", "CUSTOMDATA", "ISBLANK", "ISERROR", "ISEVEN", "ISINSCOPE", "ISLOGICAL",
    "ISNONTEXT", "ISNUMBER", "ISONORAFTER", "ISTEXT", "LOOKUPVALUE", "USERNAME",
    // logical
    "AND", "FALSE", "IF", "IFERROR", "NOT", "OR", "SWITCH", "TRUE",
    // math and trig
    "ABS", "ACOS", "ACOSH", "ASIN", "ASINH", "ATAN", "ATANH", "CEILING", "COMBIN", "COMBINA",
    "COS", "COSH", "CURRENCY", "DEGREES", "DIVIDE", "EVEN", "EXP", "FACT", "FLOOR", "GCD", "INT",
    "ISO.CEILING", "LCM", "LN", "LOG", "LOG10", "MROUND", "ODD", "PI", "POWER", "PRODUCT",
    "PRODUCTX", "QUOTIENT", "RADIANS", "RAND", "RANDBETWEEN", "ROUND", "ROUNDDOWN", "ROUNDUP",
    "SIGN", "SQRT", "SUM", "SUMX", "TRUNC",
    // table manipulation
    "CONVERT", "DATATABLE", "ERROR", "EXCEPT", "GENERATESERIES", "GROUPBY", "INTERSECT",
    "ISEMPTY", "ISSELECTEDSMEASURE", "NATURALINNERJOIN", "NATURALLEFTOUTERJOIN",
    "SELECTEDSMEASURE", "SELECTEDSMEASUREFORMATSTRING", "SELECTEDSMEASURENAME",
    "SUMMARIZECOLUMNS", "TREATAS", "UNION",
    // parent-child
    "PATH", "PATHCONTAINS", "PATHITEM", "PATHITEMREVERSE", "PATHLENGTH",
    // statistical
    "ADDCOLUMNS", "APPROXIMATEDISTINCTCOUNT", "AVERAGE", "AVERAGEA", "AVERAGEX", "BETA.DIST",
    "BETA.INV", "CHISQ.INV", "CHISQ.INV.RT", "CONFIDENCE.NORM", "CONFIDENCE.T", "COUNT",
    "COUNTA", "COUNTAX", "COUNTBLANK", "COUNTROWS", "COUNTX", "CROSSJOIN", "DISTINCTCOUNT",
    "DISTINCTCOUNTNOBLANK", "EXPON.DIST", "GENERATE", "GENERATEALL", "GEOMEAN", "GEOMEANX",
    "MAX", "MAXA", "MAXX", "MEDIAN", "MEDIANX", "MIN", "MINA", "MINX", "NORM.DIST", "NORM.INV",
    "NORM.S.DIST", "NORM.S.INV", "PERCENTILE.EXC", "PERCENTILE.INC", "PERCENTILEX.EXC",
    "PERCENTILEX.INC", "POISSON.DIST", "RANK.EQ", "RANKX", "ROW", "SAMPLE", "SELECTCOLUMNS",
    "SIN", "SINH", "STDEV.P", "STDEV.S", "STDEVX.P", "STDEVX.S", "SQRTPI", "SUMMARIZE",
    "T.DIST", "T.DIST.2T", "T.DIST.RT", "T.INV", "T.INV.2T", "TAN", "TANH", "TOPN", "VAR.P",
    "VAR.S", "VARX.P", "VARX.S", "XIRR", "XNPV",
    // text
    "BLANK", "CODE", "CONCATENATE", "CONCATENATEX", "CONTAINSSTRING", "CONTAINSSTRINGEXACT",
    "EXACT", "FIND", "FIXED", "FORMAT", "LEFT", "LEN", "LOWER", "MID", "REPLACE", "REPT",
    "RIGHT", "SEARCH", "SUBSTITUTE", "TRIM", "UNICHAR", "UPPER", "VALUE", "CURRENTGROUP",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

static FUNCTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FUNCTIONS.iter().copied().collect());

#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word.to_ascii_uppercase().as_str())
}

#[must_use]
pub fn is_function(word: &str) -> bool {
    FUNCTION_SET.contains(word.to_ascii_uppercase().as_str())
}

/// `Keyword` for reserved words, `Name` for everything else.
#[must_use]
pub fn classify_identifier(word: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else {
        TokenKind::Name
    }
}

/// `FunctionName` for built-ins, `None` when the word is not one.
#[must_use]
pub fn classify_function(word: &str) -> Option<TokenKind> {
    is_function(word).then_some(TokenKind::FunctionName)
}
