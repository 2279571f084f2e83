//! Interactive front end: list trending songs, collect the generation
//! parameters, print the post.

use std::io::{BufRead, Write};

use ai_client::TextCompletion;
use tracing::info;

use crate::error::{Result, TrendPostError};
use crate::generator::ContentGenerator;
use crate::trends::TrendProvider;
use crate::types::{GenerationRequest, Post, TrendSnapshot};

/// Answers supplied up front (e.g. from command-line flags). Each one that
/// is set skips the matching question.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub song: Option<usize>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub platform: Option<String>,
}

pub struct Driver<P, C> {
    provider: P,
    generator: ContentGenerator<C>,
    presets: Presets,
}

impl<P: TrendProvider, C: TextCompletion> Driver<P, C> {
    pub fn new(provider: P, completion: C) -> Self {
        Self {
            provider,
            generator: ContentGenerator::new(completion),
            presets: Presets::default(),
        }
    }

    pub fn with_presets(mut self, presets: Presets) -> Self {
        self.presets = presets;
        self
    }

    /// One full session. Trend and selection failures abort before any
    /// completion request is made.
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Post> {
        writeln!(output, "Fetching trends and generating content...\n")?;

        let snapshot = self.provider.fetch_trends().await?;

        writeln!(output, "\nTrending Songs:")?;
        for (index, title) in snapshot.titles.iter().enumerate() {
            writeln!(output, "{}. {}", index + 1, title)?;
        }

        let index = match self.presets.song {
            Some(index) => index,
            None => {
                let answer = ask(
                    input,
                    output,
                    "\nSelect a song by number to generate content: ",
                )?;
                parse_selection(&answer, snapshot.titles.len())?
            }
        };
        let song_title = select(&snapshot, index)?;

        let tone = self.answer(
            &self.presets.tone,
            input,
            output,
            "\nEnter the tone (e.g., 'neutral', 'energetic', 'funny'): ",
        )?;
        let length = self.answer(
            &self.presets.length,
            input,
            output,
            "\nEnter the length (e.g., 'short', 'medium', 'long'): ",
        )?;
        let platform = self.answer(
            &self.presets.platform,
            input,
            output,
            "\nSelect the platform (e.g., 'Twitter', 'Instagram', 'TikTok', 'Blog Post'): ",
        )?;

        info!(song = song_title, %platform, %tone, %length, "Generating post");

        let request = GenerationRequest::builder()
            .song_title(song_title)
            .platform(platform)
            .tone(tone)
            .length_class(length)
            .hashtags(snapshot.hashtags.clone())
            .build();

        let post = self.generator.generate(&request).await?;

        writeln!(output, "\nGenerated Content:\n")?;
        writeln!(output, "{post}")?;
        output.flush()?;

        Ok(post)
    }

    /// Preset if given, else ask. Lowercased either way; the core matches
    /// platform and length names exactly.
    fn answer<R: BufRead, W: Write>(
        &self,
        preset: &Option<String>,
        input: &mut R,
        output: &mut W,
        question: &str,
    ) -> Result<String> {
        let raw = match preset {
            Some(value) => value.trim().to_string(),
            None => ask(input, output, question)?,
        };
        Ok(raw.to_lowercase())
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse a 1-based song number typed by the user.
pub fn parse_selection(answer: &str, available: usize) -> Result<usize> {
    let invalid = || TrendPostError::InvalidSelection {
        input: answer.to_string(),
        available,
    };
    let index: usize = answer.trim().parse().map_err(|_| invalid())?;
    if index == 0 || index > available {
        return Err(invalid());
    }
    Ok(index)
}

fn select(snapshot: &TrendSnapshot, index: usize) -> Result<&str> {
    snapshot
        .title(index)
        .ok_or_else(|| TrendPostError::InvalidSelection {
            input: index.to_string(),
            available: snapshot.titles.len(),
        })
}
