//! Input source: parsing typed arrays, generating random ones and prompting.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Parses whitespace separated integers. Any bad token fails the whole line.
pub fn parse_values(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| Error::InvalidToken(token.to_string()))
        })
        .collect()
}

pub fn parse_target(line: &str) -> Result<i32> {
    let token = line.trim();
    token
        .parse::<i32>()
        .map_err(|_| Error::InvalidToken(token.to_string()))
}

/// `count` values drawn uniformly from `min..=max`.
pub fn random_values<R: Rng>(rng: &mut R, count: usize, min: i32, max: i32) -> Vec<i32> {
    (0..count).map(|_| rng.gen_range(min..=max)).collect()
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Line based prompting over any reader/writer pair.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompt { reader, writer }
    }

    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a manual or random array until one of the two is chosen.
    pub fn array(&mut self, rng: &mut StdRng, max_value: i32) -> Result<Vec<i32>> {
        loop {
            let choice = self
                .ask("Do you want to input the array manually or generate a random array? (manual/random): ")?
                .to_lowercase();
            match choice.as_str() {
                "manual" => {
                    let values = parse_values(&self.ask("Enter the array elements separated by spaces: ")?)?;
                    if values.is_empty() {
                        return Err(Error::EmptyInput);
                    }
                    return Ok(values);
                }
                "random" => {
                    let size = self.ask("Enter the size of the random array: ")?;
                    let size = size
                        .parse::<usize>()
                        .map_err(|_| Error::InvalidToken(size.clone()))?;
                    return Ok(random_values(rng, size, 1, max_value));
                }
                _ => writeln!(self.writer, "Invalid input. Please try again.")?,
            }
        }
    }

    pub fn target(&mut self) -> Result<i32> {
        parse_target(&self.ask("Enter the target element for Linear Search: ")?)
    }
}
