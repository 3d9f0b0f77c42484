//! End-to-end scenarios for the classification pipeline.

use ticket_triage::error::Result;
use ticket_triage::ml::pipeline::{ClassifierPipeline, TicketClassifier};

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn fitted_pipeline() -> Result<ClassifierPipeline> {
    let texts = strings(&[
        "printer not working",
        "password reset needed",
        "printer jammed again",
        "forgot my password",
    ]);
    let labels = strings(&["Hardware", "Security", "Hardware", "Security"]);

    let mut pipeline = ClassifierPipeline::new()?;
    pipeline.fit(&texts, &labels)?;
    Ok(pipeline)
}

fn proba_of(proba: &[(String, f64)], label: &str) -> f64 {
    proba
        .iter()
        .find(|(l, _)| l == label)
        .map(|(_, p)| *p)
        .expect("label present in posterior")
}

#[test]
fn test_routes_printer_ticket_to_hardware() -> Result<()> {
    let pipeline = fitted_pipeline()?;

    assert_eq!(pipeline.predict("my printer is broken")?, "Hardware");

    let proba = pipeline.predict_proba("my printer is broken")?;
    assert!(proba_of(&proba, "Hardware") > proba_of(&proba, "Security"));

    Ok(())
}

#[test]
fn test_posterior_is_normalized() -> Result<()> {
    let pipeline = fitted_pipeline()?;

    for text in ["my printer is broken", "need a password reset", "", "zzzz"] {
        let proba = pipeline.predict_proba(text)?;
        let total: f64 = proba.iter().map(|(_, p)| p).sum();

        assert!((total - 1.0).abs() < 1e-6, "posterior sums to {total}");
        assert!(proba.iter().all(|(_, p)| (0.0..=1.0).contains(p)));
    }

    Ok(())
}

#[test]
fn test_prediction_is_idempotent() -> Result<()> {
    let pipeline = fitted_pipeline()?;

    let first_label = pipeline.predict("printer trouble on floor two")?;
    let second_label = pipeline.predict("printer trouble on floor two")?;
    assert_eq!(first_label, second_label);

    let first_proba = pipeline.predict_proba("printer trouble on floor two")?;
    let second_proba = pipeline.predict_proba("printer trouble on floor two")?;
    assert_eq!(first_proba, second_proba);

    Ok(())
}

#[test]
fn test_verbatim_training_text_recovers_label() -> Result<()> {
    // No term overlap between the two labels, so the fitted model must
    // reproduce the training labels exactly.
    let texts = strings(&[
        "monitor flickering badly",
        "payroll deduction wrong",
        "keyboard keys sticking",
        "invoice amount incorrect",
    ]);
    let labels = strings(&["Hardware", "Finance", "Hardware", "Finance"]);

    let mut pipeline = ClassifierPipeline::new()?;
    pipeline.fit(&texts, &labels)?;

    for (text, label) in texts.iter().zip(&labels) {
        assert_eq!(&pipeline.predict(text)?, label);
    }

    Ok(())
}

#[test]
fn test_unseen_vocabulary_falls_back_to_priors() -> Result<()> {
    // Three Hardware tickets against one Security ticket: with no usable
    // terms, the prior should carry the prediction.
    let texts = strings(&[
        "printer jammed",
        "monitor dead",
        "keyboard broken",
        "password expired",
    ]);
    let labels = strings(&["Hardware", "Hardware", "Hardware", "Security"]);

    let mut pipeline = ClassifierPipeline::new()?;
    pipeline.fit(&texts, &labels)?;

    let proba = pipeline.predict_proba("xylophone quartet")?;
    assert_eq!(pipeline.predict("xylophone quartet")?, "Hardware");
    assert!((proba_of(&proba, "Hardware") - 0.75).abs() < 1e-9);

    Ok(())
}
