//! Static term tables shared by every analysis stage
//!
//! All tables are plain `const` slices. Lookups that depend on the document
//! type go through an exhaustive `match` so a new [`DocumentType`] variant
//! cannot be added without deciding its vocabulary.

use shared_types::DocumentType;

// ============================================================================
// Red-flag detection
// ============================================================================

/// Terms scanned by the red-flag detector, in detection order
pub const RED_FLAG_TERMS: &[&str] = &[
    // High priority
    "due date",
    "deadline",
    "expiration",
    "termination",
    "breach",
    "penalty",
    "fee",
    "charge",
    "cost",
    "payment",
    "fine",
    "liability",
    "responsibility",
    "obligation",
    "indemnification",
    "restriction",
    "limitation",
    "prohibition",
    "exclusion",
    "automatic renewal",
    "auto-renew",
    "subscription",
    "recurring",
    "arbitration",
    "legal action",
    "litigation",
    "dispute resolution",
    // Medium priority
    "warranty",
    "guarantee",
    "refund",
    "return",
    "cancellation",
    "modification",
    "amendment",
    "change",
    "update",
    "privacy",
    "data",
    "personal information",
    "confidential",
    "intellectual property",
    "copyright",
    "trademark",
    "patent",
    "force majeure",
    "act of god",
    "unforeseen circumstances",
    "severability",
    "invalidity",
    "unenforceable",
    // Financial
    "interest rate",
    "late fee",
    "overdue",
    "default",
    "collateral",
    "security",
    "lien",
    "mortgage",
    "tax",
    "withholding",
    "deduction",
    "exemption",
    // Legal
    "governing law",
    "jurisdiction",
    "venue",
    "choice of law",
    "waiver",
    "release",
    "disclaimer",
    "limitation of liability",
    "consequential damages",
    "punitive damages",
    "liquidated damages",
    "injunctive relief",
    "specific performance",
    "equitable relief",
];

/// A term containing any of these is a high-severity red flag
pub const HIGH_SEVERITY_TERMS: &[&str] = &[
    "penalty",
    "fee",
    "charge",
    "fine",
    "liability",
    "breach",
    "termination",
    "automatic renewal",
    "arbitration",
    "legal action",
    "indemnification",
];

/// A term containing any of these (and no high key) is a medium-severity red flag
pub const MEDIUM_SEVERITY_TERMS: &[&str] = &[
    "restriction",
    "limitation",
    "prohibition",
    "warranty",
    "guarantee",
    "privacy",
    "data",
    "intellectual property",
    "force majeure",
];

pub const DEFAULT_FLAG_DESCRIPTION: &str = "Important clause requiring attention";

/// Exact-term descriptions for red flags
pub const FLAG_DESCRIPTIONS: &[(&str, &str)] = &[
    ("due date", "Important deadline that must be met"),
    ("penalty", "Financial penalty for non-compliance"),
    ("fee", "Additional charges or costs"),
    ("liability", "Legal responsibility and potential consequences"),
    ("automatic renewal", "Contract will renew automatically without notice"),
    ("termination", "Conditions for ending the agreement"),
    ("restriction", "Limitations on your rights or usage"),
    ("privacy", "How your personal data will be used"),
];

pub const DEFAULT_FLAG_SUGGESTION: &str =
    "This clause requires careful review. Consider consulting with a professional if unclear.";

/// Remediation advice, matched by substring containment in table order
pub const FLAG_SUGGESTIONS: &[(&str, &str)] = &[
    ("due date", "Set calendar reminders and ensure you meet this deadline to avoid penalties."),
    ("deadline", "Mark this date in your calendar and prepare necessary actions in advance."),
    ("expiration", "Track this expiration date closely to avoid automatic renewals or penalties."),
    ("penalty", "This could result in financial loss. Consider negotiating or avoiding this clause."),
    ("fee", "Additional costs may apply. Budget for these expenses or negotiate removal."),
    ("charge", "You may be charged extra. Review if this is necessary for your needs."),
    ("cost", "Financial implications exist. Ensure this aligns with your budget."),
    ("payment", "Payment obligations exist. Understand the terms and amounts involved."),
    ("fine", "Financial penalties possible. Consider the risk vs. benefit of this agreement."),
    ("liability", "You may be held legally responsible. Consider liability insurance or negotiation."),
    ("responsibility", "Legal obligations exist. Ensure you can fulfill these requirements."),
    ("obligation", "You have binding duties. Make sure you can meet these commitments."),
    ("termination", "Understand how to end this agreement. Check notice requirements and penalties."),
    ("cancellation", "Review cancellation terms carefully. Some may have fees or restrictions."),
    ("automatic renewal", "Contract renews automatically. Set reminders to cancel if needed."),
    ("auto-renew", "Automatic renewal active. Monitor renewal dates to avoid unwanted charges."),
    ("subscription", "Recurring charges apply. Track billing cycles and cancellation policies."),
    ("recurring", "Ongoing charges exist. Monitor your account for unexpected fees."),
    ("restriction", "Limitations on your rights. Ensure these don't conflict with your needs."),
    ("limitation", "Your rights are limited. Consider if these restrictions are acceptable."),
    ("prohibition", "Certain actions are forbidden. Make sure you can comply."),
    ("exclusion", "Some protections are excluded. Consider additional coverage if needed."),
    ("privacy", "Your data usage is defined. Review what information is collected and shared."),
    ("data", "Personal information handling. Understand how your data is used and protected."),
    ("personal information", "Data collection terms. Ensure you're comfortable with data sharing."),
    ("arbitration", "Disputes resolved through arbitration. You may lose right to court."),
    ("legal action", "Legal proceedings possible. Understand your rights and potential costs."),
    ("litigation", "Court proceedings may occur. Consider legal representation costs."),
    ("dispute resolution", "Conflict resolution process. Understand your options and costs."),
    ("warranty", "Service guarantees exist. Understand what's covered and excluded."),
    ("guarantee", "Promises made by provider. Ensure these meet your expectations."),
    ("refund", "Return policy defined. Understand refund conditions and timelines."),
    ("return", "Return terms specified. Check if return conditions work for you."),
    ("modification", "Agreement can be changed. Understand how changes are communicated."),
    ("amendment", "Contract modifications possible. Monitor for changes that affect you."),
    ("change", "Terms may be updated. Stay informed about modifications."),
    ("update", "Agreement updates occur. Review changes to ensure they're acceptable."),
];

// ============================================================================
// Consent checklist
// ============================================================================

/// First-person acknowledgement statements, matched by substring containment in table order
pub const CONSENT_STATEMENTS: &[(&str, &str)] = &[
    ("due date", "I understand the deadline requirements and the consequences of missing them"),
    ("deadline", "I understand the deadline requirements and the consequences of missing them"),
    ("expiration", "I understand the expiration terms and what happens when they expire"),
    ("penalty", "I acknowledge potential penalties and financial consequences for non-compliance"),
    ("fee", "I understand additional fees may apply and will be charged to my account"),
    ("charge", "I acknowledge potential charges that may be applied to my payment method"),
    ("cost", "I understand the cost implications and total financial commitment required"),
    ("payment", "I understand payment obligations and the consequences of late or missed payments"),
    ("fine", "I acknowledge potential fines and penalties for violating the agreement terms"),
    ("liability", "I understand liability implications and my legal responsibility for damages"),
    ("responsibility", "I acknowledge my responsibilities and obligations under this agreement"),
    ("obligation", "I understand my obligations and the legal consequences of not fulfilling them"),
    ("termination", "I understand termination terms and the process for ending this agreement"),
    ("cancellation", "I understand cancellation policies and any fees associated with cancellation"),
    ("automatic renewal", "I understand automatic renewal terms and how to prevent unwanted renewals"),
    ("auto-renew", "I understand automatic renewal terms and how to prevent unwanted renewals"),
    ("subscription", "I understand subscription terms and recurring billing cycles"),
    ("recurring", "I understand recurring charges and how they will be processed"),
    ("restriction", "I understand usage restrictions and limitations on my rights"),
    ("limitation", "I understand limitations on my rights and available remedies"),
    ("prohibition", "I understand prohibited actions and the consequences of violating them"),
    ("exclusion", "I understand exclusions and what is not covered by this agreement"),
    ("privacy", "I understand privacy terms and how my personal information will be used"),
    ("data", "I understand data handling practices and how my information is processed"),
    ("personal information", "I understand data collection practices and third-party sharing policies"),
    ("arbitration", "I understand arbitration terms and that I may lose the right to court proceedings"),
    ("legal action", "I understand legal implications and potential court proceedings"),
    ("litigation", "I understand litigation terms and the costs associated with legal disputes"),
    ("dispute resolution", "I understand dispute resolution processes and available options"),
    ("warranty", "I understand warranty terms and what is covered or excluded"),
    ("guarantee", "I understand guarantee terms and the limitations of service promises"),
    ("refund", "I understand refund policies and the conditions for receiving money back"),
    ("return", "I understand return terms and any fees or conditions for returns"),
    ("modification", "I understand modification rights and how changes will be communicated"),
    ("amendment", "I understand amendment terms and how the agreement can be changed"),
    ("change", "I understand change policies and notification requirements for updates"),
    ("update", "I understand update terms and how modifications will be implemented"),
];

// ============================================================================
// Classification
// ============================================================================

pub const LEASE_INDICATORS: &[&str] = &["lease", "rental", "tenant"];
pub const TERMS_INDICATORS: &[&str] = &["terms of service", "terms and conditions"];
pub const PRIVACY_INDICATORS: &[&str] = &["privacy policy"];
pub const AGREEMENT_INDICATORS: &[&str] = &["agreement", "contract"];

// ============================================================================
// Sentence scoring
// ============================================================================

/// Legal keywords worth 3 points each
pub const SCORE_HIGH_KEYWORDS: &[&str] = &[
    "agreement",
    "terms",
    "obligation",
    "responsibility",
    "liability",
    "penalty",
    "breach",
    "termination",
    "renewal",
    "amendment",
];

/// Legal keywords worth 2 points each
pub const SCORE_MEDIUM_KEYWORDS: &[&str] = &[
    "payment",
    "fee",
    "cost",
    "deposit",
    "refund",
    "warranty",
    "guarantee",
    "dispute",
    "arbitration",
    "jurisdiction",
];

/// Legal keywords worth 1 point each
pub const SCORE_LOW_KEYWORDS: &[&str] = &[
    "service",
    "user",
    "account",
    "access",
    "privacy",
    "data",
    "information",
    "notification",
    "contact",
];

/// Phrases that signal a binding statement
pub const MODAL_PHRASES: &[&str] = &[
    "shall be",
    "must be",
    "will be",
    "is required",
    "is obligated",
    "is liable",
    "is responsible",
];

/// Terms worth a 2 point boost for the given document type
pub fn type_boost_terms(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::Lease => &[
            "rent",
            "tenant",
            "landlord",
            "property",
            "lease term",
            "security deposit",
            "maintenance",
            "utilities",
        ],
        DocumentType::Terms => &[
            "service",
            "user agreement",
            "account",
            "usage",
            "restrictions",
            "prohibited",
            "acceptable use",
        ],
        DocumentType::Privacy => &[
            "personal information",
            "data collection",
            "cookies",
            "tracking",
            "third party",
            "sharing",
        ],
        DocumentType::Agreement => &[
            "contract",
            "parties",
            "consideration",
            "performance",
            "breach",
            "remedies",
            "governing law",
        ],
        DocumentType::General => &[],
    }
}

// ============================================================================
// Synopsis
// ============================================================================

/// A sentence mentioning one of these is preferred for a section synopsis
pub const SYNOPSIS_KEYWORDS: &[&str] = &[
    "payment",
    "fee",
    "cost",
    "deadline",
    "termination",
    "liability",
    "obligation",
    "responsibility",
    "privacy",
    "data",
    "service",
    "agreement",
    "contract",
    "rights",
    "restrictions",
    "penalty",
];

pub const SYNOPSIS_PADDING: &str =
    "This section contains important terms that require careful consideration.";
pub const SYNOPSIS_FALLBACK: [&str; 2] = [
    "This section outlines key terms and conditions.",
    "Please review all details carefully before proceeding.",
];

// ============================================================================
// Rating
// ============================================================================

/// Rating deductions of 2.0 per matched term
pub const RATING_HIGH_TERMS: &[&str] = &[
    "automatic renewal",
    "auto-renew",
    "binding arbitration",
    "class action waiver",
    "liquidated damages",
    "penalty",
    "penalty clause",
    "excessive late fees",
    "unilateral modification",
    "data selling",
    "third party sharing",
    "no refund",
    "no cancellation",
    "forced arbitration",
    "waiver of rights",
    "indemnification",
    "hold harmless",
];

/// Rating deductions of 1.0 per matched term
pub const RATING_MEDIUM_TERMS: &[&str] = &[
    "liability limitation",
    "disclaimer of warranty",
    "limited liability",
    "termination fees",
    "cancellation fees",
    "modification rights",
    "privacy policy changes",
    "terms changes",
    "service interruption",
    "data collection",
    "tracking",
    "cookies",
    "personal information",
];

/// Rating deductions of 0.5 per matched term
pub const RATING_LOW_TERMS: &[&str] = &[
    "terms of service",
    "user agreement",
    "acceptable use",
    "prohibited use",
    "account suspension",
    "content removal",
    "service availability",
    "technical support",
    "maintenance",
    "updates",
    "subscription",
];

/// Rating bonus of 0.5 per matched term
pub const POSITIVE_INDICATORS: &[&str] = &[
    "refund policy",
    "cancellation rights",
    "privacy protection",
    "data security",
    "user rights",
    "dispute resolution",
    "customer service",
    "transparent pricing",
    "fair use",
];
