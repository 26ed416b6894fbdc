//! Closed option sets for the intake forms.
//!
//! Every multi-select / select-box answer is a tagged variant, not free
//! text. The wire label (what the form shows and what the debug JSON view
//! serializes) is the single source of truth for each variant — `Display`
//! and serde both go through it, so a record round-trips the exact strings
//! the form offered.

use serde::{Deserialize, Serialize};

macro_rules! form_options {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every option, in the order the form presents them.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The human-readable form label for this option.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

form_options! {
    /// Industries / domains a senior wants to work with.
    Domain {
        Saas => "SaaS",
        Fintech => "Fintech",
        Edtech => "Edtech",
        Healthtech => "Healthtech",
        Ecommerce => "E-commerce",
        Telecom => "Telecom",
        Manufacturing => "Manufacturing",
        Retail => "Retail",
        Hospitality => "Hospitality",
        Other => "Other",
    }
}

form_options! {
    /// Startup stage a senior prefers to advise.
    StartupStage {
        IdeaStage => "Idea stage",
        MvpBuilt => "MVP built",
        EarlyRevenue => "Early revenue",
        Scaling => "Scaling",
        Any => "Any",
    }
}

form_options! {
    /// Kinds of problems a senior enjoys solving.
    ProblemType {
        StrategyDirection => "Strategy & Direction",
        OperationsExecution => "Operations & Execution",
        ProductUx => "Product & UX",
        SalesGtm => "Sales & GTM",
        FinanceUnitEconomics => "Finance & Unit Economics",
        PeopleCulture => "People & Culture",
        TurnaroundCrisis => "Turnaround / Crisis",
        Other => "Other",
    }
}

form_options! {
    /// Where a founder's problem hurts the most.
    ImpactArea {
        RevenueSales => "Revenue / Sales",
        GrowthNewCustomers => "Growth / New customers",
        CustomerSatisfaction => "Customer satisfaction",
        OperationsDelivery => "Operations / Delivery",
        TeamClarityMorale => "Team clarity / morale",
        CashflowRunway => "Cashflow / Runway",
        Other => "Other",
    }
}

form_options! {
    /// Why the founder believes the problem exists.
    RootCause {
        LackOfExperience => "Lack of experience in this area",
        LimitedBudget => "Limited budget",
        WeakStrategy => "Weak or unclear strategy",
        PoorExecution => "Poor execution / follow-through",
        NoMentor => "No mentor / guidance",
        TeamTooJunior => "Team too junior",
        WrongPositioning => "Wrong product positioning",
        NotTalkingToCustomers => "Not talking enough to customers",
        LowSalesExperience => "Low sales experience",
        MarketMightNotBeRight => "Market might not be right",
        NotSure => "I am not sure",
        Other => "Other",
    }
}

form_options! {
    /// What the founder has already tried.
    Remedy {
        PaidAds => "Paid ads / performance marketing",
        ContentMarketing => "Content or social media marketing",
        Discounts => "Discounts / offers",
        ChangingPricing => "Changing pricing",
        HiringNewPeople => "Hiring new people",
        TalkingToCustomers => "Talking to customers",
        ChangingTheProduct => "Changing the product",
        NothingYet => "Nothing yet",
        Other => "Other",
    }
}

form_options! {
    /// Stage of the founder's company.
    CompanyStage {
        Idea => "Idea",
        Prototype => "Prototype",
        Mvp => "MVP",
        EarlyRevenue => "Early revenue",
        Scaling => "Scaling",
    }
}

/// Join a list of options with `", "` — the delimiter the payload
/// templates and the original forms use everywhere.
pub fn join_labels<T: std::fmt::Display>(options: &[T]) -> String {
    options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_serde() {
        for cause in RootCause::ALL {
            let json = serde_json::to_string(cause).unwrap();
            assert_eq!(json, format!("\"{}\"", cause.label()));
            let back: RootCause = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *cause);
        }
    }

    #[test]
    fn test_join_labels() {
        assert_eq!(
            join_labels(&[ImpactArea::RevenueSales, ImpactArea::CashflowRunway]),
            "Revenue / Sales, Cashflow / Runway"
        );
        assert_eq!(join_labels::<ImpactArea>(&[]), "");
    }
}
