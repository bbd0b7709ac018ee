//! Streaming recognizer for `mul(A,B)`, `do()` and `don't()` instructions.
//!
//! The [Scanner] is fed one character at a time and never looks further
//! ahead than the character it is given. Instructions embedded in arbitrary
//! text are recognized exactly, everything else is silently skipped.

#[cfg(test)]
mod tests;

use core::fmt;

use arrayvec::ArrayString;
use thiserror::Error;

/// Maximum number of characters buffered toward a single instruction.
pub const MAX_SIGNAL: usize = 20;

/// Default number of digits permitted in each operand of `mul`.
pub const DEFAULT_MAX_DIGITS: usize = 3;

/// The characters accepted toward the instruction currently being matched.
pub type Signal = ArrayString<MAX_SIGNAL>;

/// Errors which abort a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// Accepting another character would grow the signal past [MAX_SIGNAL].
    #[error("signal `{signal}` exceeds maximum length of {max}")]
    SignalTooLong { signal: Signal, max: usize },
    /// A completed signal does not have the shape of the instruction it
    /// completed.
    #[error("malformed instruction `{signal}`")]
    MalformedInstruction { signal: Signal },
    /// The product or the accumulated value does not fit.
    #[error("instruction `{signal}` overflows the accumulated value")]
    Overflow { signal: Signal },
}

/// A recognized instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `mul(A,B)`.
    Mul(i64, i64),
    /// `do()`.
    Do,
    /// `don't()`.
    Dont,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Mul(a, b) => write!(f, "mul({a},{b})"),
            Instruction::Do => write!(f, "do()"),
            Instruction::Dont => write!(f, "don't()"),
        }
    }
}

/// Recognition state of the [Scanner].
///
/// Each variant corresponds to the prefix of an instruction matched so far.
/// The number states carry the number of digits seen in the operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing matched.
    Scanning,
    MatchedM,
    MatchedMu,
    MatchedMul,
    /// Inside the first operand of `mul(`.
    NumberA(usize),
    /// Inside the second operand of `mul(`.
    NumberB(usize),
    MatchedD,
    MatchedDo,
    MatchedDoOpen,
    MatchedDon,
    MatchedDonApos,
    MatchedDont,
    MatchedDontOpen,
}

/// Which instruction a completing character finishes.
#[derive(Debug, Clone, Copy)]
enum Token {
    Mul,
    Do,
    Dont,
}

#[derive(Debug, Clone, Copy)]
enum Transition {
    /// Character is not of interest in the neutral state.
    Ignore,
    /// Character extends the current signal.
    Accept(State),
    /// Character completes an instruction.
    Complete(Token),
    /// Character does not continue the current signal.
    Reject,
}

impl State {
    /// The single transition function of the machine.
    fn next(self, c: char, toggles: bool, max_digits: usize) -> Transition {
        use self::State::*;

        match (self, c) {
            (Scanning, 'm') => Transition::Accept(MatchedM),
            (Scanning, 'd') if toggles => Transition::Accept(MatchedD),
            (Scanning, _) => Transition::Ignore,
            (MatchedM, 'u') => Transition::Accept(MatchedMu),
            (MatchedMu, 'l') => Transition::Accept(MatchedMul),
            (MatchedMul, '(') => Transition::Accept(NumberA(0)),
            (NumberA(n), '0'..='9') if n < max_digits => Transition::Accept(NumberA(n + 1)),
            (NumberA(n), ',') if n > 0 => Transition::Accept(NumberB(0)),
            (NumberB(n), '0'..='9') if n < max_digits => Transition::Accept(NumberB(n + 1)),
            (NumberB(n), ')') if n > 0 => Transition::Complete(Token::Mul),
            (MatchedD, 'o') => Transition::Accept(MatchedDo),
            (MatchedDo, '(') => Transition::Accept(MatchedDoOpen),
            (MatchedDoOpen, ')') => Transition::Complete(Token::Do),
            (MatchedDo, 'n') => Transition::Accept(MatchedDon),
            (MatchedDon, '\'') => Transition::Accept(MatchedDonApos),
            (MatchedDonApos, 't') => Transition::Accept(MatchedDont),
            (MatchedDont, '(') => Transition::Accept(MatchedDontOpen),
            (MatchedDontOpen, ')') => Transition::Complete(Token::Dont),
            _ => Transition::Reject,
        }
    }
}

/// A single-pass instruction scanner.
///
/// # Examples
///
/// ```
/// use lib::scan::Scanner;
///
/// let mut scanner = Scanner::new(true);
/// scanner.feed_str("mul(2,4)don't()mul(5,5)do()?mul(8,5)")?;
/// assert_eq!(scanner.value(), 48);
///
/// let mut scanner = Scanner::new(false);
/// scanner.feed_str("mul(2,4)don't()mul(5,5)do()?mul(8,5)")?;
/// assert_eq!(scanner.value(), 73);
/// # Ok::<_, lib::scan::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    state: State,
    signal: Signal,
    value: i64,
    toggles: bool,
    suppressed: bool,
    max_digits: usize,
}

impl Scanner {
    /// Construct a new scanner.
    ///
    /// If `toggles` is set, `do()` and `don't()` are recognized and enable
    /// or disable accumulation. Otherwise every `mul` is accumulated.
    #[inline]
    pub fn new(toggles: bool) -> Self {
        Self::with_max_digits(toggles, DEFAULT_MAX_DIGITS)
    }

    /// Construct a new scanner which permits up to `max_digits` digits in
    /// each operand.
    ///
    /// Once operands may be longer than the signal can hold, [MAX_SIGNAL] is
    /// the limit that applies and oversized instructions fail with
    /// [ScanError::SignalTooLong].
    pub fn with_max_digits(toggles: bool, max_digits: usize) -> Self {
        Self {
            state: State::Scanning,
            signal: Signal::new(),
            value: 0,
            toggles,
            suppressed: false,
            max_digits: max_digits.max(1),
        }
    }

    /// The accumulated value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The current recognition state.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// The characters matched since the last reset.
    #[inline]
    pub fn signal(&self) -> &str {
        self.signal.as_str()
    }

    /// Test if a `don't()` currently keeps `mul` from being accumulated.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Test if `do()` and `don't()` are recognized.
    #[inline]
    pub fn toggle_enabled(&self) -> bool {
        self.toggles
    }

    /// Feed a single character.
    #[inline]
    pub fn feed(&mut self, c: char) -> Result<(), ScanError> {
        self.step(c)?;
        Ok(())
    }

    /// Feed every character of `string` in order.
    pub fn feed_str(&mut self, string: &str) -> Result<(), ScanError> {
        for c in string.chars() {
            self.step(c)?;
        }

        Ok(())
    }

    /// Feed a single character, returning the instruction it completed if
    /// any.
    ///
    /// A character which doesn't continue the current signal resets the
    /// scanner and is then fed once more, so it can start a new instruction.
    /// The scanner is reset after every completed instruction, including
    /// one which fails.
    pub fn step(&mut self, c: char) -> Result<Option<Instruction>, ScanError> {
        let transition = match self.state.next(c, self.toggles, self.max_digits) {
            Transition::Reject => {
                self.reset();
                // The rejected character might start a new instruction.
                self.state.next(c, self.toggles, self.max_digits)
            }
            transition => transition,
        };

        match transition {
            Transition::Ignore | Transition::Reject => Ok(None),
            Transition::Accept(state) => {
                self.push(c)?;
                self.state = state;
                Ok(None)
            }
            Transition::Complete(token) => {
                self.push(c)?;
                let instruction = self.complete(token);
                self.reset();
                Ok(Some(instruction?))
            }
        }
    }

    fn push(&mut self, c: char) -> Result<(), ScanError> {
        if self.signal.try_push(c).is_err() {
            return Err(ScanError::SignalTooLong {
                signal: self.signal,
                max: MAX_SIGNAL,
            });
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.signal.clear();
        self.state = State::Scanning;
    }

    fn complete(&mut self, token: Token) -> Result<Instruction, ScanError> {
        let instruction = match token {
            Token::Mul => match operands(&self.signal) {
                Some((a, b)) => Instruction::Mul(a, b),
                None => return Err(self.malformed()),
            },
            Token::Do if self.signal.as_str() == "do()" => Instruction::Do,
            Token::Dont if self.signal.as_str() == "don't()" => Instruction::Dont,
            _ => return Err(self.malformed()),
        };

        let applied = self.apply(instruction)?;

        log::trace!(
            "{instruction}: applied: {applied}, value: {value}",
            value = self.value
        );

        Ok(instruction)
    }

    /// Apply an instruction, returning `false` if it was suppressed.
    fn apply(&mut self, instruction: Instruction) -> Result<bool, ScanError> {
        match instruction {
            Instruction::Mul(..) if self.suppressed => return Ok(false),
            Instruction::Mul(a, b) => {
                let Some(value) = a.checked_mul(b).and_then(|p| self.value.checked_add(p)) else {
                    return Err(ScanError::Overflow {
                        signal: self.signal,
                    });
                };

                self.value = value;
            }
            Instruction::Do => {
                self.suppressed = false;
            }
            Instruction::Dont => {
                self.suppressed = true;
            }
        }

        Ok(true)
    }

    #[inline]
    fn malformed(&self) -> ScanError {
        ScanError::MalformedInstruction {
            signal: self.signal,
        }
    }
}

/// Extract the operands of a completed `mul(A,B)` signal.
fn operands(signal: &str) -> Option<(i64, i64)> {
    let rest = signal.strip_prefix("mul(")?.strip_suffix(')')?;
    let (a, b) = rest.split_once(',')?;
    return Some((digits(a)?, digits(b)?));

    fn digits(string: &str) -> Option<i64> {
        if string.is_empty() || !string.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        string.parse().ok()
    }
}
