use crate::app::err::*;

#[derive(Clone, Debug, PartialEq)]
pub struct RawInput {
    pub values: Vec<f64>,
    pub rows: Vec<usize>,
    pub boundaries: Vec<usize>,
}

impl RawInput {
    // stream layout: n, n values, n row indices, m, m column boundaries;
    // the matrix is (m - 1) x (m - 1).
    pub fn parse(input: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut tokens = input.split_whitespace();

        let n: usize = take(&mut tokens, "entry count")?.parse()?;
        let values = parse_seq(&mut tokens, n, "value")?;
        let rows = parse_seq(&mut tokens, n, "row index")?;

        let m: usize = take(&mut tokens, "boundary count")?.parse()?;
        ensure!(m >= 1, "boundary count must be at least 1, got {m}");
        let boundaries = parse_seq(&mut tokens, m, "column boundary")?;

        Ok(Self { values, rows, boundaries })
    }

    pub fn size(&self) -> usize {
        self.boundaries.len() - 1
    }
}

fn take<'a, I>(tokens: &mut I, what: &str) -> Result<&'a str, Box<dyn std::error::Error>>
where I: Iterator<Item = &'a str> {
    match tokens.next() {
        Some(t) => Ok(t),
        None => err!("unexpected end of input, expected {what}")
    }
}

fn parse_seq<'a, I, T>(tokens: &mut I, count: usize, what: &str) -> Result<Vec<T>, Box<dyn std::error::Error>>
where
    I: Iterator<Item = &'a str>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    (0..count).map(|i| {
        let t = take(tokens, what)?;
        match t.parse() {
            Ok(v) => Ok(v),
            Err(e) => err!("cannot parse {what} #{i} '{t}': {e}")
        }
    }).collect()
}
