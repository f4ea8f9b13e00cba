//! Project plan phases

use super::types::{PhaseStatus, PlanPhase};
use crate::icons::Icon;

pub static PLAN_PHASES: &[PlanPhase] = &[
    PlanPhase {
        id: "phase-0",
        title: "Phase 0: Setup & Tooling",
        icon: Icon::Setup,
        description: "Foundation for the SIEM pipeline: choosing the SIEM, setting up basic infrastructure using IaC, and creating a mock microservice for log generation.",
        key_actions: &[
            "SIEM Choice & Basic Setup (IaC - Simplified). Primary: Azure Sentinel. Fallback: ELK.",
            "Mock Microservice: Simple Python (Flask) or Node.js (Express) app with logging.",
            "Containerize (Optional): Dockerfile for the mock app.",
        ],
        status: PhaseStatus::Conceptual,
        deliverables: &[
            "Terraform (main.tf) / docker-compose.yml",
            "Mock App (app.py/app.js)",
            "Dockerfile",
        ],
        details: Some("Focus on Azure Sentinel using Terraform for Log Analytics Workspace and Sentinel solution. If ELK, Docker Compose for local setup. Mock microservice logs to stdout."),
    },
    PlanPhase {
        id: "phase-1",
        title: "Phase 1: Log Collection & Ingestion",
        icon: Icon::Ingestion,
        description: "Collecting logs from the mock microservice and relevant cloud platform services, and ingesting them into the chosen SIEM.",
        key_actions: &[
            "Ingest Mock Microservice Logs (application, access, container stdout): Azure Monitor Agent (AMA) for Sentinel or Fluent Bit for ELK.",
            "Ingest Cloud Platform Logs: Azure Activity Logs, AWS CloudTrail (conceptual).",
            "Ingest Kubernetes Control-Plane Events: API server, kubelet logs (conceptual).",
        ],
        status: PhaseStatus::Conceptual,
        deliverables: &[
            "AMA config (conceptual) / fluent-bit.conf",
            "Screenshots of ingested logs (simulated)",
        ],
        details: Some("Ensure comprehensive log collection. For Azure Sentinel with containers, AMA collects stdout. For ELK, Fluent Bit tails logs. Cloud platform logs (e.g., Azure Activity, AWS CloudTrail) and Kubernetes events (API server, kubelet) are crucial for context."),
    },
    PlanPhase {
        id: "phase-2",
        title: "Phase 2: Detection Rules & Dashboards",
        icon: Icon::Detection,
        description: "Authoring 3-5 core analytics rules to detect suspicious activities and creating dashboards for visualization.",
        key_actions: &[
            "Author 3-5 Analytics Rules (KQL/DSL): Spike in HTTP 4xx/5xx Errors; Unexpected Privilege Escalations; Large Data Pulls from Storage.",
            "Build a Dashboard: Visualizations for \"Privilege Elevations vs. Login Successes\", \"Data Transfer by Service\", \"Error-Rate Trends\".",
            "Tune thresholds to minimize false positives but catch real incidents.",
        ],
        status: PhaseStatus::Conceptual,
        deliverables: &[
            "KQL/DSL queries",
            "Dashboard export JSON/NDJSON (conceptual)",
        ],
        details: Some("Rules target specific scenarios like unexpected privilege escalations, spikes in 4xx/5xx errors, and large data pulls. Dashboard provides at-a-glance view of key security metrics. Tuning is an ongoing process."),
    },
    PlanPhase {
        id: "phase-3",
        title: "Phase 3: Automated Response Playbooks",
        icon: Icon::Response,
        description: "Creating automated actions to respond to specific alerts, including Slack notifications, simulated IP blocking, and service account disabling.",
        key_actions: &[
            "For each detection rule, create response (Logic App / Python script).",
            "Action: Post detailed alerts to Slack (log snippets, links).",
            "Action: Automatically tag or block suspicious IPs at WAF/NSG.",
            "Action: Disable or rotate compromised service accounts if critical alert fires.",
            "Document Runbook for \"Detected Data Exfiltration\" & \"Compromised API Key\".",
        ],
        status: PhaseStatus::Conceptual,
        deliverables: &[
            "Logic App JSON (conceptual) / Python script",
            "RUNBOOK.md section",
        ],
        details: Some("Focus on automated responses like Slack notifications, (simulated) WAF/NSG IP blocking, and disabling/rotating service accounts for critical alerts. Runbook details manual steps for specific incidents."),
    },
    PlanPhase {
        id: "phase-4",
        title: "Phase 4: CI/CD Integration",
        icon: Icon::CiCd,
        description: "Integrating SIEM checks into the deployment pipeline and ensuring new services can be onboarded via templates.",
        key_actions: &[
            "Integrate SIEM check: Pipeline verifies \"no new critical alerts\" in the last hour after release.",
            "New microservices onboarding: Use a template for automatic log path registration and baseline rules.",
            "Ensure rule-triggered issues block promotion to production until acknowledged.",
        ],
        status: PhaseStatus::Conceptual,
        deliverables: &["CI/CD YAML file (e.g., .github/workflows/ci.yml)"],
        details: Some("Demonstrate DevSecOps: Check for new critical alerts post-deployment. New microservices are onboarded with templates. Rule-triggered issues halt production promotion."),
    },
    PlanPhase {
        id: "phase-5",
        title: "Phase 5: Documentation & Deliverables (Overall)",
        icon: Icon::Docs,
        description: "Comprehensive documentation including a README and the full RUNBOOK, ensuring all project deliverables are met.",
        key_actions: &[
            "README.md: Project overview, tech choices, setup, deliverables explanation.",
            "RUNBOOK.md (Full): Onboarding, incident response, rule tuning guidelines.",
            "Verify all deliverables are addressed.",
        ],
        status: PhaseStatus::Conceptual,
        deliverables: &[
            "README.md",
            "RUNBOOK.md (full version)",
            "All deliverables (simulated/showcased)",
        ],
        details: Some("Final documentation consolidating all aspects. Cross-reference with the 'Deliverables Checklist' to ensure completeness."),
    },
];
