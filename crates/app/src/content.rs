//! Canonical portfolio content, built once on first access and never mutated.

use std::sync::LazyLock;

use folio_domain::content::{
    Assets, ContactLinks, Content, EducationEntry, ExperienceEntry, Profile, Project, SkillGroup,
};

static PORTFOLIO: LazyLock<Content> = LazyLock::new(build);

/// The content tables rendered by the page.
#[must_use]
pub fn portfolio() -> &'static Content {
    &PORTFOLIO
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

fn build() -> Content {
    Content {
        profile: Profile {
            name: "Alex Rivera".to_string(),
            role: "DevOps & Cloud Engineer".to_string(),
            location: "Austin, TX".to_string(),
            introduction: "I build delivery pipelines and cloud platforms that let product \
                           teams ship several times a day without paging anyone at night. \
                           Most of my work sits between Kubernetes, Terraform and the CI \
                           system, with observability wired in from the first commit."
                .to_string(),
            contact: ContactLinks {
                github: "https://github.com/example".to_string(),
                linkedin: "https://www.linkedin.com/in/example".to_string(),
                email: "mailto:hello@example.com".to_string(),
            },
        },
        skills: vec![
            SkillGroup::new("Cloud", ["AWS", "Azure", "Google Cloud"]),
            SkillGroup::new(
                "Containers & Orchestration",
                ["Docker", "Kubernetes", "Helm", "Argo CD"],
            ),
            SkillGroup::new("Infrastructure as Code", ["Terraform", "Ansible", "CloudFormation"]),
            SkillGroup::new("CI/CD", ["GitHub Actions", "GitLab CI", "Jenkins"]),
            SkillGroup::new("Observability", ["Prometheus", "Grafana", "Loki", "OpenTelemetry"]),
            SkillGroup::new("Languages", ["Bash", "Python", "Go", "Rust"]),
        ],
        experience: vec![
            ExperienceEntry {
                title: "Senior DevOps Engineer".to_string(),
                employer: "Northwind Logistics".to_string(),
                location: "Remote".to_string(),
                period: "2022 – Present".to_string(),
                highlights: strings([
                    "Moved 40 services from hand-managed VMs to EKS with GitOps deployments",
                    "Cut median pipeline time from 25 to 7 minutes with layered caching",
                    "Introduced SLO-based alerting and halved weekly on-call pages",
                ]),
            },
            ExperienceEntry {
                title: "Cloud Engineer".to_string(),
                employer: "Brightline Health".to_string(),
                location: "Austin, TX".to_string(),
                period: "2019 – 2022".to_string(),
                highlights: strings([
                    "Codified the AWS estate in Terraform modules shared by six teams",
                    "Built blue/green releases for the patient portal with zero-downtime cutover",
                    "Automated nightly cost reports that trimmed spend by 18%",
                ]),
            },
            ExperienceEntry {
                title: "Systems Administrator".to_string(),
                employer: "Lakeside University".to_string(),
                location: "Madison, WI".to_string(),
                period: "2016 – 2019".to_string(),
                highlights: strings([
                    "Maintained Linux fleet of 300 hosts with Ansible",
                    "Replaced cron sprawl with a monitored job scheduler",
                ]),
            },
        ],
        education: vec![
            EducationEntry {
                degree: "B.S. Computer Science".to_string(),
                school: "University of Wisconsin".to_string(),
                location: "Madison, WI".to_string(),
                period: "2012 – 2016".to_string(),
            },
            EducationEntry {
                degree: "Certified Kubernetes Administrator".to_string(),
                school: "Cloud Native Computing Foundation".to_string(),
                location: "Online".to_string(),
                period: "2021".to_string(),
            },
        ],
        projects: vec![
            Project {
                title: "Self-Service Preview Environments".to_string(),
                problem: "Reviewers waited on a shared staging cluster that was always broken."
                    .to_string(),
                stack: strings(["Kubernetes", "Argo CD", "Terraform", "GitHub Actions"]),
                impact: "Every pull request gets its own URL in under five minutes.".to_string(),
                repository: "https://github.com/example/preview-environments".to_string(),
            },
            Project {
                title: "Golden Path Terraform Modules".to_string(),
                problem: "Each team hand-rolled VPCs, IAM and databases with drifting defaults."
                    .to_string(),
                stack: strings(["Terraform", "AWS", "Terratest"]),
                impact: "New services reach production with audited defaults on day one."
                    .to_string(),
                repository: "https://github.com/example/terraform-golden-path".to_string(),
            },
            Project {
                title: "Observability Starter Kit".to_string(),
                problem: "Incidents were diagnosed from raw logs on individual hosts.".to_string(),
                stack: strings(["Prometheus", "Grafana", "Loki", "OpenTelemetry"]),
                impact: "Mean time to detect dropped from hours to minutes.".to_string(),
                repository: "https://github.com/example/observability-starter".to_string(),
            },
        ],
        assets: Assets::default(),
    }
}
