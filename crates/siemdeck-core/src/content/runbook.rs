//! Runbook sections

use super::types::RunbookSection;

pub static RUNBOOK_SECTIONS: &[RunbookSection] = &[
    RunbookSection {
        id: "onboarding",
        title: "How to Onboard a New Microservice's Logs",
        content: "### Objective
Ensure logs from new microservices are consistently collected and ingested into the SIEM (Azure Sentinel or ELK).

### For Azure Sentinel with AMA (Azure Monitor Agent)
1.  **Ensure Microservice Logs to Stdout/File:**
    *   Configure the microservice to output logs (JSON format preferred) to STDOUT/STDERR if containerized. This covers **application, access, and container stdout logs**.
    *   If running on a VM, ensure logs are written to a consistent file path (e.g., `/var/log/my-app/app.log`).
2.  **Create/Update Data Collection Rule (DCR) for AMA:**
    *   In Azure Portal, navigate to Monitor -> Data Collection Rules.
    *   **For Containers (AKS/ACI):** Ensure AMA is configured. For **Kubernetes control-plane events (API server, kubelet)**, enable relevant diagnostic settings for AKS to forward to Log Analytics.
    *   **For VMs:** Create or modify a DCR for custom text logs, Windows Event Logs, or Linux Syslog.
    *   **Cloud Platform Logs:** Enable connectors for **Azure Activity Logs**. For AWS, ingest **CloudTrail** logs via an S3 bucket and data connector or Lambda.
3.  **Verify Log Ingestion & Develop Baseline Rules.**

### For ELK Stack with Fluent Bit
1.  **Ensure Microservice Logs to Stdout/File.** (Covers **application, access, container stdout logs**)
2.  **Update Fluent Bit Configuration (`fluent-bit.conf`):**
    *   Add inputs for new service logs. For **Kubernetes control-plane events**, configure Fluent Bit (often as a DaemonSet) to collect logs from control plane nodes or use a K8s log forwarder.
    *   For **Cloud Platform Logs** (e.g., AWS CloudTrail from S3), use Fluent Bit's S3 input plugin or a similar mechanism.
3.  **Update Elasticsearch Index Template & Verify.**
4.  **Develop Baseline Detection Rules.**

### General Considerations
*   **Structured Logging:** JSON preferred.
*   **Log Retention & Documentation.**",
    },
    RunbookSection {
        id: "ir-data-exfil",
        title: "IR Scenario: Detected Data Exfiltration",
        content: "### Alert Trigger
*   **Rule Name:** \"Potential Data Exfiltration Attempt\" / \"Large Data Pull from Storage\"
*   **Description:** High volume of data egress from an internal sensitive system (e.g., database server, file share, cloud storage) to an untrusted external IP address, or unusual protocols/ports used for large transfers.
*   **Severity:** Critical

### Automated Actions (from Playbook)
1.  **Notification:** Immediate alert to #security-alerts Slack channel.
2.  **IP Blocking:** Attempt to add the suspicious external Destination IP to a WAF/NSG blocklist.
3.  **Account Action (Conditional):** If tied to a specific compromised user/service account, attempt to disable the account or force MFA re-authentication.

### Manual Analyst Steps
1.  **Validation (Triage - P1 - Immediate):** Confirm alert, identify source/destination, check IP reputation, review logs (network flow, firewall, proxy, source system).
2.  **Containment:** Block IP, isolate host, disable/reset compromised accounts, preserve evidence.
3.  **Eradication:** Identify malware/compromise vector, remove malicious code, patch vulnerabilities.
4.  **Recovery:** Restore systems, monitor closely, rotate credentials.
5.  **Lessons Learned:** Post-incident review, update rules/controls, update runbook.",
    },
    RunbookSection {
        id: "ir-api-key",
        title: "IR Scenario: Compromised API Key",
        content: "### Alert Trigger
*   **Rule Name:** \"Compromised API Key Usage\"
*   **Description:** API key used from unusual location/IP, or performs anomalous actions.
*   **Severity:** High to Critical

### Automated Actions (from Playbook)
1.  **Notification:** Alert to #security-alerts Slack channel.
2.  **Key Rotation/Revocation:** Attempt to revoke or trigger rotation for the suspected compromised API key. (Critical Action: May initially be manual for safety).
3.  **Service Account Disabling:** If the API key is tied to a service account and severity is critical, the playbook might attempt to **disable the associated service account.**

### Manual Analyst Steps
1.  **Validation (Triage - P1 - Immediate):** Confirm alert, identify API key & service, assess anomalous activity (source IP/geo, actions, time).
2.  **Containment:** **Revoke or Disable API Key (Highest Priority!)**. Identify scope of exposure. Block source IP.
3.  **Eradication:** Identify how key was exposed (hardcoded, leak, phishing). Scan for other instances.
4.  **Recovery:** Issue new key (least privilege), update apps securely, audit actions of compromised key, monitor new key.
5.  **Lessons Learned:** Review API key management, secrets scanning, developer education, improve detection.",
    },
    RunbookSection {
        id: "tuning-rules",
        title: "Guidelines for Tuning Rules Over Time",
        content: "### Objective
Minimize false positives (FPs) and false negatives (FNs) to improve SIEM effectiveness and reduce analyst fatigue.

### Process
1.  **Regular Review:** Prioritize noisy or new rules.
2.  **Analyze False Positives:** Investigate *why*. Common causes: low thresholds, broad logic, legitimate unusual activity. Tuning: Adjust thresholds, add exclusions/whitelists (sparingly), refine logic, use contextual enrichment.
3.  **Analyze False Negatives:** Harder. Discover via threat hunting, post-incident analysis, red teaming. Tuning: Broaden logic (carefully), lower thresholds (carefully), create new rules, improve log coverage.
4.  **Documentation & Change Management:** Document all changes, version control rules, test changes.
5.  **Feedback Loop & Stay Updated.**",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{format, resolve, Block, Inline};

    #[test]
    fn test_sections_format_into_structured_blocks() {
        for section in RUNBOOK_SECTIONS {
            let blocks = format(section.content);
            assert!(
                matches!(blocks.first(), Some(Block::Heading { level: 3, .. })),
                "{} should open with a heading",
                section.id
            );
            assert!(
                blocks
                    .iter()
                    .any(|b| matches!(b, Block::List { ordered: true, .. })),
                "{} should contain an ordered list",
                section.id
            );
        }
    }

    #[test]
    fn test_ordered_steps_keep_bold_labels() {
        let blocks = format(RUNBOOK_SECTIONS[1].content);
        let steps = blocks
            .iter()
            .find_map(|b| match b {
                Block::List {
                    ordered: true,
                    items,
                } => Some(items),
                _ => None,
            })
            .expect("ordered list");
        assert_eq!(steps.len(), 3);
        assert_eq!(
            resolve(&steps[0]).first(),
            Some(&Inline::Bold("Notification:".to_string()))
        );
    }

    #[test]
    fn test_nested_bullets_split_ordered_lists() {
        let blocks = format(RUNBOOK_SECTIONS[0].content);
        let kinds: Vec<bool> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::List { ordered, .. } => Some(*ordered),
                _ => None,
            })
            .collect();
        assert_eq!(&kinds[..4], &[true, false, true, false]);
    }
}
