//! Deliverables checklist

use super::types::{DeliverableItem, View};

pub static DELIVERABLES: &[DeliverableItem] = &[
    DeliverableItem {
        id: "del-iac",
        title: "Infrastructure as Code (IaC)",
        description: "An Ansible playbook or Terraform module that spins up the SIEM (ELK or Sentinel) and configures data connectors.",
        reference: "Page 2, Item 1",
        link: View::Artifacts,
        link_text: "View IaC Examples",
    },
    DeliverableItem {
        id: "del-rules-dashboards",
        title: "Detection Rules & Dashboards",
        description: "Exported KQL (or Elasticsearch DSL) rules and a JSON/NDJSON of the dashboard containing visualizations.",
        reference: "Page 2, Item 2",
        link: View::Rules,
        link_text: "View Detection Rules & Dashboard Info",
    },
    DeliverableItem {
        id: "del-response-scripts",
        title: "Response Scripts/Playbooks",
        description: "Python or Logic App flows that post Slack alerts, update firewall/WAF rules, and rotate keys.",
        reference: "Page 2, Item 3",
        link: View::Playbooks,
        link_text: "View Playbook Examples",
    },
    DeliverableItem {
        id: "del-runbook",
        title: "Runbook Documentation (1-2 pages)",
        description: "1. How to onboard a new microservice's logs. 2. Steps for responding to two high-severity incidents. 3. Guidelines for tuning rules over time.",
        reference: "Page 2, Item 4",
        link: View::Runbook,
        link_text: "View Runbook",
    },
    DeliverableItem {
        id: "del-cicd-snippet",
        title: "CI/CD Snippet",
        description: "A pipeline fragment (e.g., GitHub Actions or Azure Pipelines YAML) showing how to validate \"no critical alerts\" before merging/deployment.",
        reference: "Page 2, Item 5",
        link: View::Artifacts,
        link_text: "View CI/CD Snippet",
    },
];
