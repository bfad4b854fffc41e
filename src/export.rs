//! File export: prediction tables and diagnostic reports.
use serde::Serialize;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{self, Write};

use crate::metrics::Diagnostics;
use crate::sample::{Attribute, Sample};
use crate::tree::DecisionTree;


/// Write `samples` as a semicolon-separated table with the tree's
/// prediction appended to every row:
/// six attribute columns, the true label, and the predicted label.
pub fn write_predictions_csv<P>(
    path: P,
    samples: &[Sample],
    tree: &DecisionTree,
) -> io::Result<()>
    where P: AsRef<Path>,
{
    let mut f = File::create(path)?;

    let header = Attribute::ALL.iter()
        .map(|attribute| attribute.name())
        .collect::<Vec<_>>()
        .join(";");
    writeln!(f, "{header};Label;Predicted")?;

    for sample in samples {
        let values = Attribute::ALL.iter()
            .map(|&attribute| sample.value(attribute).to_string())
            .collect::<Vec<_>>()
            .join(";");
        writeln!(f, "{values};{};{}", sample.label(), tree.predict(sample))?;
    }

    Ok(())
}


/// A diagnostic report: the run settings and one
/// [`Diagnostics`] block per evaluated dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Identifier of the generation run (a timestamp).
    pub generated: String,
    /// Positive training examples used.
    pub n_positive_train: usize,
    /// Negative training examples used.
    pub n_negative_train: usize,
    /// Diagnostics per dataset, in insertion order.
    pub sections: Vec<ReportSection>,
}


/// One dataset's diagnostics inside a [`Report`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    /// Dataset name, e.g. `Training data`.
    pub dataset: String,
    /// The measured ratios.
    pub diagnostics: Diagnostics,
}


impl Report {
    /// An empty report with the given run settings.
    pub fn new<S>(
        generated: S,
        n_positive_train: usize,
        n_negative_train: usize,
    ) -> Self
        where S: ToString,
    {
        Self {
            generated: generated.to_string(),
            n_positive_train,
            n_negative_train,
            sections: Vec::new(),
        }
    }


    /// Append one dataset's diagnostics.
    pub fn push<S>(&mut self, dataset: S, diagnostics: Diagnostics)
        where S: ToString,
    {
        self.sections.push(ReportSection {
            dataset: dataset.to_string(),
            diagnostics,
        });
    }


    /// Write the report as plain text.
    pub fn write_text<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>,
    {
        let mut f = File::create(path)?;
        write!(f, "{self}")?;

        Ok(())
    }


    /// Write the report as JSON.
    pub fn write_json<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>,
    {
        let f = File::create(path)?;
        serde_json::to_writer_pretty(f, self)?;

        Ok(())
    }
}


impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree generation {}", self.generated)?;
        writeln!(f)?;
        writeln!(f, "Settings:")?;
        writeln!(f, "Positive training examples: {}", self.n_positive_train)?;
        writeln!(f, "Negative training examples: {}", self.n_negative_train)?;
        writeln!(f)?;
        writeln!(f, "Diagnostics:")?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}:", section.dataset)?;
            writeln!(f, "{}", section.diagnostics)?;
        }

        Ok(())
    }
}
