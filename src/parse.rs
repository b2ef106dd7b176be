use crate::{Expr, Operator, Output, SyntaxError, TruthError, VariableName};
use itertools::Itertools;
use log::{debug, warn};
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use std::collections::HashMap;

#[derive(Parser)]
#[grammar_inline = r####"
expr       = _{ SOI ~ term ~ EOI }
term       =  { operand ~ ( operator ~ term )? }
operand    = _{ complement | group | literal | variable }
complement =  { "!" ~ ( group | literal | variable ) }
group      =  { "(" ~ term ~ ")" }
operator   = _{ and | or }
and        =  { "&&" | "&" | "." | "*" }
or         =  { "||" | "|" | "+" }
literal    = _{ bf | bt }
bf         =  { "0" }
bt         =  { "1" }
variable   = @{ character ~ ( character | ASCII_DIGIT )* }
character  = _{ LETTER | "\\" | "_" | "^" | "{" | "}" }

WHITESPACE = _{ " " | "\t" | "\r" | "\n" }
"####]
struct ExpressionParser;

static _LIST_SEPARATOR: char = ',';

/// Parse a Boolean expression.
///
/// * ```0``` and ```1``` are the false and true literals.
/// * Variables are runs of letters and LaTeX markup symbols (```\ _ ^ { }```),
///   with digits allowed after the first character.
///   Literals are tried before variables: ```1x``` is rejected as it is neither.
/// * ```!``` negates the group, literal or variable which immediately follows it.
///   It does not apply to a whole binary operation (```!p + q``` is ```(!p) + q```) and
///   can not be stacked without parenthesis (use ```!(!p)```).
/// * ```.```, ```&```, ```&&``` and ```*``` are spellings of ```AND```;
///   ```+```, ```|``` and ```||``` are spellings of ```OR```.
/// * ```AND``` and ```OR``` share the same priority and chains of operations are grouped on the right:
///   ```a + b . c``` is ```a + (b . c)``` and ```a . b + c``` is ```a . (b + c)```.
/// * Whitespace between tokens is ignored.
///
/// ```
/// use truthkit::parse_expression;
///
/// let e1 = parse_expression("a . b + c").unwrap();
/// let e2 = parse_expression("a & (b | c)").unwrap();
/// assert_eq!(e1, e2);
///
/// let err = parse_expression("p&&").unwrap_err();
/// assert_eq!(err.expression(), "p&&");
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, SyntaxError> {
    let mut parsed = ExpressionParser::parse(Rule::expr, source).map_err(|e| {
        let position = match e.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((p, _)) => p,
        };
        SyntaxError::new(source, Some(position), describe_error(&e.variant))
    })?;
    let root = next_pair(&mut parsed, source)?;
    let expr = load_expr(root, source)?;
    debug!("parsed '{}' as {}", source, &expr);
    Ok(expr)
}

/// Parse a batch of output expressions.
///
/// Each distinct source string is parsed once, repeated sources share the same tree.
/// All sources are checked: if any of them is invalid, the returned error lists every invalid source.
pub fn parse_outputs<I, S>(sources: I) -> Result<Vec<Output>, TruthError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: HashMap<String, Expr> = HashMap::new();
    let mut outputs = Vec::new();
    let mut errors: Vec<SyntaxError> = Vec::new();
    for source in sources {
        let source = source.as_ref();
        if let Some(expr) = parsed.get(source) {
            outputs.push(Output::new(source, expr.clone()));
            continue;
        }
        match parse_expression(source) {
            Ok(expr) => {
                parsed.insert(source.to_string(), expr.clone());
                outputs.push(Output::new(source, expr));
            }
            Err(e) => {
                if !errors.iter().any(|err| err.expression() == source) {
                    errors.push(e);
                }
            }
        }
    }

    if errors.is_empty() {
        return Ok(outputs);
    }
    warn!("{} invalid output expression(s)", errors.len());
    Err(TruthError::Syntax(errors))
}

/// Split a comma separated list, trimming spaces around the items and dropping empty ones.
///
/// ```
/// # use truthkit::split_list;
/// let items: Vec<&str> = split_list(" p, q ,, r_{1} ").collect();
/// assert_eq!(items, vec!["p", "q", "r_{1}"]);
/// ```
pub fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(_LIST_SEPARATOR)
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, source: &str) -> Result<Pair<'i, Rule>, SyntaxError> {
    pairs
        .next()
        .ok_or_else(|| SyntaxError::new(source, None, "incomplete expression"))
}

fn load_expr(pair: Pair<Rule>, source: &str) -> Result<Expr, SyntaxError> {
    let rule = pair.as_rule();
    match rule {
        Rule::bt => Ok(Expr::Literal(true)),
        Rule::bf => Ok(Expr::Literal(false)),
        Rule::variable => Ok(Expr::Variable(VariableName::from_token(pair.as_str()))),
        _ => {
            let position = pair.as_span().start();
            let mut inner = pair.into_inner();
            let first = load_expr(next_pair(&mut inner, source)?, source)?;
            match rule {
                Rule::group => Ok(first),
                Rule::complement => Ok(!first),
                Rule::term => {
                    // A single operand, or an operation grouping the remainder on the right
                    let op = match inner.next() {
                        None => return Ok(first),
                        Some(pair) => match pair.as_rule() {
                            Rule::and => Operator::And,
                            Rule::or => Operator::Or,
                            r => return Err(unexpected(source, position, r)),
                        },
                    };
                    let second = load_expr(next_pair(&mut inner, source)?, source)?;
                    Ok(op.join(first, second))
                }
                // Other rules are hidden
                r => Err(unexpected(source, position, r)),
            }
        }
    }
}

fn unexpected(source: &str, position: usize, rule: Rule) -> SyntaxError {
    SyntaxError::new(source, Some(position), format!("unexpected {}", describe_rule(rule)))
}

fn describe_error(variant: &ErrorVariant<Rule>) -> String {
    match variant {
        ErrorVariant::ParsingError { positives, .. } if positives.is_empty() => {
            String::from("unexpected input")
        }
        ErrorVariant::ParsingError { positives, .. } => {
            format!("expected {}", positives.iter().map(|r| describe_rule(*r)).unique().join(" or "))
        }
        ErrorVariant::CustomError { message } => message.clone(),
    }
}

fn describe_rule(rule: Rule) -> &'static str {
    match rule {
        Rule::and | Rule::or => "operator",
        Rule::bf | Rule::bt => "literal",
        Rule::variable => "variable",
        Rule::group => "group",
        Rule::complement => "complement",
        Rule::EOI => "end of input",
        _ => "expression",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use test_log::test;

    fn var(name: &str) -> Expr {
        Expr::Variable(VariableName::from_token(name))
    }

    #[test]
    fn single_tokens() -> Result<(), SyntaxError> {
        assert_eq!(parse_expression("0")?, Expr::Literal(false));
        assert_eq!(parse_expression("1")?, Expr::Literal(true));
        assert_eq!(parse_expression("p")?, var("p"));
        assert_eq!(parse_expression("switchOne")?, var("switchOne"));
        assert_eq!(parse_expression("p_{1}")?, var("p_{1}"));
        assert_eq!(parse_expression("\\alpha^2")?, var("\\alpha^2"));
        assert_eq!(parse_expression(" ( p ) ")?, var("p"));
        assert_eq!(parse_expression("((p))")?, var("p"));
        Ok(())
    }

    #[test]
    fn complement() -> Result<(), SyntaxError> {
        assert_eq!(parse_expression("!p")?, !var("p"));
        assert_eq!(parse_expression("!(p)")?, !var("p"));
        assert_eq!(parse_expression("!0")?, !Expr::Literal(false));
        assert_eq!(parse_expression("!(!p)")?, !!var("p"));
        assert_eq!(parse_expression("!p+q")?, !var("p") | var("q"));
        assert_eq!(parse_expression("!(p+q)")?, !(var("p") | var("q")));
        assert!(parse_expression("!!p").is_err());
        Ok(())
    }

    #[test]
    fn operator_spellings() -> Result<(), SyntaxError> {
        let and = var("p") & var("q");
        for s in ["p.q", "p&q", "p&&q", "p*q", "p . q", "p && q"] {
            assert_eq!(parse_expression(s)?, and, "{}", s);
        }
        let or = var("p") | var("q");
        for s in ["p+q", "p|q", "p||q", "p + q", "p || q"] {
            assert_eq!(parse_expression(s)?, or, "{}", s);
        }
        Ok(())
    }

    #[test]
    fn right_grouping() -> Result<(), SyntaxError> {
        let (a, b, c) = (var("a"), var("b"), var("c"));
        assert_eq!(parse_expression("a+b.c")?, &a | (&b & &c));
        assert_eq!(parse_expression("a.b+c")?, &a & (&b | &c));
        assert_eq!(parse_expression("a+b+c")?, &a | (&b | &c));
        assert_eq!(parse_expression("(a.b)+c")?, (&a & &b) | &c);
        Ok(())
    }

    #[test]
    fn deeply_nested_groups() -> Result<(), SyntaxError> {
        let depth = 64;
        let nested = format!("{}p{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_expression(&nested)?, var("p"));

        let negated = format!("{}p{}", "!(".repeat(depth), ")".repeat(depth));
        let mut expected = var("p");
        for _ in 0..depth {
            expected = !expected;
        }
        assert_eq!(parse_expression(&negated)?, expected);

        let chained = format!("{}a + b{} . c", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_expression(&chained)?, (var("a") | var("b")) & var("c"));

        let unbalanced = format!("{}p{}", "(".repeat(depth), ")".repeat(depth - 1));
        assert!(parse_expression(&unbalanced).is_err());
        Ok(())
    }

    #[test]
    fn idempotent_parsing() -> Result<(), SyntaxError> {
        for s in ["switchOne || a & !b", "!(p.q)", "x_1 * (1 + !y) | 0"] {
            assert_eq!(parse_expression(s)?, parse_expression(s)?);
        }
        Ok(())
    }

    #[test]
    fn syntax_errors() {
        for s in ["", "p&&", "&p", "p q", "(p", "p)", "1x", "10", "!", "p +* q", "p,q", "2"] {
            let err = parse_expression(s).unwrap_err();
            assert_eq!(err.expression(), s);
            assert!(err.position().is_some(), "{}", s);
        }

        let err = parse_expression("p&&").unwrap_err();
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn batch_of_outputs() {
        let outputs = parse_outputs(["!p+q", "p.q", "!p+q"]).unwrap();
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].source(), "!p+q");
        assert_eq!(outputs[0].expr(), outputs[2].expr());

        let err = parse_outputs(["p&&", "p+q", "(q", "p&&"]).unwrap_err();
        match err {
            TruthError::Syntax(errors) => {
                let sources: Vec<&str> = errors.iter().map(|e| e.expression()).collect();
                assert_eq!(sources, vec!["p&&", "(q"]);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn list_splitting() {
        assert_eq!(split_list("").count(), 0);
        assert_eq!(split_list(" , ,").count(), 0);
        let items: Vec<&str> = split_list("!p+q, !(p.q), switchOne || a & !b").collect();
        assert_eq!(items, vec!["!p+q", "!(p.q)", "switchOne || a & !b"]);
    }
}
