pub type Int = i64;
pub type Var = String;

pub mod parse {
    use nom::character::complete::{char, digit1, one_of};
    use nom::combinator::{all_consuming, opt, recognize};
    use nom::sequence::{pair, tuple};
    use nom::IResult;

    // Optionally signed integer or decimal literal.
    pub fn number(input: &str) -> IResult<&str, &str> {
        recognize(tuple((
            opt(one_of("+-")),
            digit1,
            opt(pair(char('.'), digit1)),
        )))(input)
    }

    pub fn is_number(token: &str) -> bool {
        all_consuming(number)(token).is_ok()
    }

}
