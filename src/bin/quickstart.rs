//! Walks through the marketplace with a small sample catalog.
//!
//! Run with `cargo run --bin quickstart`. Each section publishes, searches,
//! reviews or ranks listings and writes what it observed to stdout.

use agentmarket::Marketplace;
use agentmarket::catalog::domain::{ListingDraft, ReviewDraft, SearchFilter};
use std::error::Error;
use std::io::{self, Write};

type DemoResult = Result<(), Box<dyn Error>>;

const RULE: &str = "============================================================";

fn main() -> DemoResult {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "agentmarket quickstart (v{})", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;

    let marketplace = agentmarket::in_memory_marketplace();
    for draft in sample_listings() {
        marketplace.publish(draft)?;
    }
    writeln!(
        out,
        "  Sample catalog populated with {} agents.",
        marketplace.catalog().len()
    )?;
    writeln!(out)?;

    publish_and_retrieve(&marketplace, &mut out)?;
    search(&marketplace, &mut out)?;
    reviews(&marketplace, &mut out)?;
    leaderboards(&marketplace, &mut out)?;
    pipeline(&marketplace, &mut out)?;

    writeln!(out, "All demos completed successfully.")?;
    Ok(())
}

fn sample_listings() -> Vec<ListingDraft> {
    vec![
        ListingDraft::new(
            "code-review-agent-v2",
            "Code Review Agent",
            "Automated code review covering security vulnerabilities, style violations and algorithmic complexity.",
            "AumAI Engineering",
            "Apache-2.0",
            "pip install aumai-agent-code-review",
        )
        .with_version("2.1.0")
        .with_capabilities([
            "code_review",
            "security_analysis",
            "style_check",
            "complexity_analysis",
        ])
        .with_tags(["code", "devops", "security", "ci-cd"])
        .with_downloads(8_450)
        .with_rating(4.7),
        ListingDraft::new(
            "invoice-parser-v3",
            "Invoice Parser Agent",
            "Extracts structured data from PDF and scanned invoices, including line items, totals and vendor details.",
            "AumAI Finance Team",
            "Apache-2.0",
            "pip install aumai-agent-invoice-parser",
        )
        .with_version("3.0.1")
        .with_capabilities(["pdf_parsing", "ocr", "structured_output", "entity_extraction"])
        .with_tags(["finance", "invoices", "ocr", "enterprise"])
        .with_downloads(12_200)
        .with_rating(4.5),
        ListingDraft::new(
            "sql-query-agent-v1",
            "SQL Query Agent",
            "Translates natural language questions into optimized SQL queries with schema introspection.",
            "AumAI Data Team",
            "MIT",
            "pip install aumai-agent-sql",
        )
        .with_version("1.4.0")
        .with_capabilities(["text_to_sql", "schema_introspection", "query_optimization"])
        .with_tags(["sql", "database", "analytics", "enterprise"])
        .with_downloads(5_800)
        .with_rating(4.3),
        ListingDraft::new(
            "doc-summarizer-v1",
            "Document Summarizer Agent",
            "Produces executive briefings from long documents with key points, risks and action items.",
            "AumAI Research",
            "Apache-2.0",
            "pip install aumai-agent-summarizer",
        )
        .with_capabilities([
            "document_summarization",
            "structured_output",
            "risk_extraction",
        ])
        .with_tags(["nlp", "summarization", "enterprise"])
        .with_downloads(980)
        .with_rating(4.1),
        ListingDraft::new(
            "web-scraper-v2",
            "Web Scraper Agent",
            "Scrapes web pages, including JavaScript-rendered content, into structured JSON.",
            "AumAI Web Team",
            "Apache-2.0",
            "pip install aumai-agent-web-scraper",
        )
        .with_version("2.0.0")
        .with_capabilities(["web_scraping", "html_parsing", "structured_output", "js_rendering"])
        .with_tags(["web", "scraping", "data-collection"])
        .with_downloads(15_600)
        .with_rating(4.6),
    ]
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}

fn publish_and_retrieve(marketplace: &Marketplace, out: &mut impl Write) -> DemoResult {
    heading(out, "Publish and retrieve")?;

    let published = marketplace.publish(
        ListingDraft::new(
            "rag-retrieval-agent-v1",
            "RAG Retrieval Agent",
            "Dense vector retrieval over document corpora with reranking and citation extraction.",
            "AumAI RAG Team",
            "Apache-2.0",
            "pip install aumai-agent-rag-retrieval",
        )
        .with_capabilities(["vector_retrieval", "reranking", "citation_extraction"])
        .with_tags(["rag", "retrieval", "nlp"]),
    )?;
    writeln!(
        out,
        "  Published: [{}] {}",
        published.agent_id(),
        published.name()
    )?;

    let fetched = marketplace.get("rag-retrieval-agent-v1")?;
    writeln!(out, "  Retrieved: {} v{}", fetched.name(), fetched.version())?;
    writeln!(out, "  Author: {}", fetched.author())?;
    writeln!(out, "  Capabilities: {}", fetched.capabilities().join(", "))?;
    writeln!(out, "  Install: {}", fetched.install_command())?;

    if let Err(err) = marketplace.get("nonexistent-agent-xyz") {
        writeln!(out)?;
        writeln!(out, "  Lookup failed: {err}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn search(marketplace: &Marketplace, out: &mut impl Write) -> DemoResult {
    heading(out, "Multi-criteria search")?;

    let queries = [
        ("query 'document'", SearchFilter::new().with_query("document")),
        (
            "capabilities structured_output + ocr",
            SearchFilter::new().with_capabilities(["structured_output", "ocr"]),
        ),
        ("min_rating 4.5", SearchFilter::new().with_min_rating(4.5)?),
        ("tag enterprise", SearchFilter::new().with_tags(["enterprise"])),
        (
            "combined",
            SearchFilter::new()
                .with_query("agent")
                .with_capabilities(["structured_output"])
                .with_tags(["enterprise"])
                .with_min_rating(4.0)?,
        ),
    ];

    for (label, filter) in &queries {
        let results = marketplace.search(filter);
        writeln!(out, "  {label}: {} result(s)", results.len())?;
        for listing in &results {
            writeln!(
                out,
                "    [{}] {} (rating: {})",
                listing.agent_id(),
                listing.name(),
                listing.rating()
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn reviews(marketplace: &Marketplace, out: &mut impl Write) -> DemoResult {
    heading(out, "Reviews and rating updates")?;

    let target = "sql-query-agent-v1";
    let listing = marketplace.get(target)?;
    writeln!(out, "  Agent: {}", listing.name())?;
    writeln!(out, "  Initial rating: {}/5.0 (set on publish)", listing.rating())?;

    let drafts = [
        ReviewDraft::new("data_engineer_alice", 4.9)
            .with_comment("Generates correct SQL almost every time. Handles complex joins well."),
        ReviewDraft::new("analyst_bob", 4.2)
            .with_comment("Great for standard analytics queries. Struggles with window functions."),
        ReviewDraft::new("dba_carol", 3.8)
            .with_comment("Acceptable for prototyping. Needs review before production use."),
    ];
    for draft in drafts {
        let review = marketplace.submit_review(target, draft)?;
        let updated = marketplace.get(target)?;
        writeln!(
            out,
            "  After review from {}: rating={}/5.0",
            review.reviewer(),
            updated.rating()
        )?;
    }

    let history = marketplace.reviews(target);
    writeln!(out)?;
    writeln!(out, "  All reviews for '{target}' ({} total):", history.len())?;
    for review in &history {
        writeln!(
            out,
            "    {}: {}/5  \"{}\"",
            review.reviewer(),
            review.rating(),
            review.comment()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn leaderboards(marketplace: &Marketplace, out: &mut impl Write) -> DemoResult {
    heading(out, "Leaderboards")?;

    writeln!(out, "  Top 3 by rating:")?;
    for (rank, listing) in (1..).zip(marketplace.top_rated(3)) {
        writeln!(
            out,
            "    #{rank}  [{}] {}  {}/5.0",
            listing.agent_id(),
            listing.name(),
            listing.rating()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "  Top 3 by downloads:")?;
    for (rank, listing) in (1..).zip(marketplace.trending(3)) {
        writeln!(
            out,
            "    #{rank}  [{}] {}  {} downloads",
            listing.agent_id(),
            listing.name(),
            listing.downloads()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn pipeline(marketplace: &Marketplace, out: &mut impl Write) -> DemoResult {
    heading(out, "Pipeline assembly by capability")?;

    let steps = [
        ("web_scraping", "Scrape"),
        ("structured_output", "Structure"),
        ("document_summarization", "Summarize"),
    ];
    for (capability, step) in steps {
        let filter = SearchFilter::new()
            .with_capabilities([capability])
            .with_min_rating(4.0)?;
        writeln!(out)?;
        writeln!(out, "  {step}")?;
        match marketplace.search(&filter).first() {
            Some(best) => {
                writeln!(out, "    Agent:   {} (rating: {}/5.0)", best.name(), best.rating())?;
                writeln!(out, "    Install: {}", best.install_command())?;
            }
            None => writeln!(
                out,
                "    No agent with capability '{capability}' rated 4.0 or higher."
            )?,
        }
    }
    writeln!(out)?;
    Ok(())
}
