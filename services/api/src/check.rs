use clap::Args;
use kisan_mitra::config::AppConfig;
use kisan_mitra::eligibility::{DecisionResult, SchemeVerdict, UserProfile};
use kisan_mitra::error::AppError;
use kisan_mitra::explain::{Locale, Narrative};

use crate::infra::{build_advisor, load_catalog};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Cultivated land in hectares
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) land_size: f64,
    /// Main crop grown
    #[arg(long, default_value = "")]
    pub(crate) crop: String,
    /// Annual household income in rupees
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: f64,
    /// Whether the farm has irrigation (yes/no)
    #[arg(
        long,
        default_value = "no",
        action = clap::ArgAction::Set,
        value_parser = crate::infra::parse_yes_no
    )]
    pub(crate) irrigation: bool,
    /// State of residence
    #[arg(long, default_value = "")]
    pub(crate) state: String,
    /// Narrative language (en or hi)
    #[arg(long, default_value = "en")]
    pub(crate) language: String,
    /// Number of recommended schemes to highlight
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Request a generated explanation in addition to the decision
    #[arg(long)]
    pub(crate) narrate: bool,
    /// Print the decision as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let locale: Locale = args.language.parse()?;
    let advisor = build_advisor(&config)?;

    let profile = UserProfile {
        land_size: args.land_size,
        crop_type: args.crop,
        annual_income: args.income,
        irrigation_available: args.irrigation,
        state: args.state,
    };

    let decision = advisor.decide(&profile, args.top);
    let narrative = if args.narrate {
        Some(advisor.narrate(&decision, locale).await)
    } else {
        None
    };

    if args.json {
        let summary = decision.summary();
        let payload = serde_json::json!({
            "structuredResult": &decision,
            "summary": summary,
            "aiExplanation": narrative.as_ref().map(|narrative| narrative.text.as_str()),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_decision(&profile, &decision, narrative.as_ref());
    }

    Ok(())
}

pub(crate) fn run_schemes() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config)?;

    println!("{} schemes loaded", catalog.len());
    for scheme in catalog.schemes() {
        println!(
            "- {} [{}] benefit ₹{} | documents: {}",
            scheme.name,
            scheme.id,
            scheme.benefit_amount,
            scheme.required_documents.join(", ")
        );
    }
    Ok(())
}

fn render_decision(
    profile: &UserProfile,
    decision: &DecisionResult,
    narrative: Option<&Narrative>,
) {
    let summary = decision.summary();

    println!("Scheme eligibility report");
    println!(
        "Profile: {} ha, crop '{}', income ₹{}, irrigation {}, state '{}'",
        profile.land_size,
        profile.crop_type,
        profile.annual_income,
        if profile.irrigation_available { "yes" } else { "no" },
        profile.state
    );
    println!(
        "Eligible: {} | Not eligible: {} | Total potential benefit: ₹{}",
        summary.eligible_count, summary.not_eligible_count, summary.total_potential_benefit
    );

    if decision.top_recommended.is_empty() {
        println!("\nNo recommended schemes for this profile.");
    } else {
        println!("\nTop recommended");
        for (index, verdict) in decision.top_recommended.iter().enumerate() {
            println!(
                "  {}. {} (₹{})",
                index + 1,
                verdict.scheme_name,
                verdict.benefit_amount
            );
            print_reasons("why", &verdict.matched_conditions);
            if !verdict.required_documents.is_empty() {
                println!("       documents: {}", verdict.required_documents.join(", "));
            }
        }
    }

    let others: Vec<&SchemeVerdict> = decision.other_eligible().collect();
    if !others.is_empty() {
        println!("\nAlso eligible");
        for verdict in others {
            println!("  - {} (₹{})", verdict.scheme_name, verdict.benefit_amount);
        }
    }

    if !decision.not_eligible.is_empty() {
        println!("\nNot eligible");
        for verdict in &decision.not_eligible {
            println!("  - {} (score {})", verdict.scheme_name, verdict.score);
            print_reasons("why not", &verdict.failed_conditions);
        }
    }

    if let Some(narrative) = narrative {
        println!("\nExplanation ({})", narrative.locale.display_name());
        println!("{}", narrative.text);
    }
}

fn print_reasons(label: &str, reasons: &[String]) {
    for reason in reasons {
        println!("       {label}: {reason}");
    }
}
