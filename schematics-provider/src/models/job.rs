use chrono::{DateTime, Utc};

use super::{BastionResourceDefinition, ExternalSource, InventoryResourceRecord, VariableData};

model! {
    pub struct JobStatusTemplate {
        template_id: String,
        template_name: String,
        flow_index: i64,
        status_code: String,
        status_message: String,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobStatusWorkitem {
        workspace_id: String,
        workspace_name: String,
        job_id: String,
        status_code: String,
        status_message: String,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobStatusFlow {
        flow_id: String,
        flow_name: String,
        status_code: String,
        status_message: String,
        workitems: Vec<JobStatusWorkitem>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobStatusWorkspace {
        workspace_name: String,
        status_code: String,
        status_message: String,
        flow_status: JobStatusFlow,
        template_status: Vec<JobStatusTemplate>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobStatusAction {
        action_name: String,
        status_code: String,
        status_message: String,
        bastion_status_code: String,
        bastion_status_message: String,
        targets_status_code: String,
        targets_status_message: String,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobStatusSchematicsResources {
        status_code: String,
        status_message: String,
        schematics_resource_id: String,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobStatusSystem {
        system_status_message: String,
        system_status_code: String,
        schematics_resource_status: Vec<JobStatusSchematicsResources>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    /// Per-kind status of a job; only the part matching the job's kind is set
    pub struct JobStatus {
        workspace_job_status: JobStatusWorkspace,
        action_job_status: JobStatusAction,
        system_job_status: JobStatusSystem,
        flow_job_status: JobStatusFlow,
    }
}

model! {
    pub struct JobDataTemplate {
        template_id: String,
        template_name: String,
        flow_index: i64,
        inputs: Vec<VariableData>,
        outputs: Vec<VariableData>,
        settings: Vec<VariableData>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobDataWorkspace {
        workspace_name: String,
        flow_id: String,
        flow_name: String,
        inputs: Vec<VariableData>,
        outputs: Vec<VariableData>,
        settings: Vec<VariableData>,
        template_data: Vec<JobDataTemplate>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobDataAction {
        action_name: String,
        inputs: Vec<VariableData>,
        outputs: Vec<VariableData>,
        settings: Vec<VariableData>,
        updated_at: DateTime<Utc>,
        inventory_record: InventoryResourceRecord,
        materialized_inventory: String,
    }
}

model! {
    pub struct JobDataSystem {
        key_id: String,
        schematics_resource_id: Vec<String>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobDataWorkItemLastJob {
        command_object: String,
        command_object_name: String,
        command_object_id: String,
        command_name: String,
        job_id: String,
        job_status: String,
    }
}

model! {
    pub struct JobDataWorkItem {
        command_object_id: String,
        command_object_name: String,
        layers: String,
        source_type: String,
        source: ExternalSource,
        inputs: Vec<VariableData>,
        outputs: Vec<VariableData>,
        settings: Vec<VariableData>,
        last_job: JobDataWorkItemLastJob,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobDataFlow {
        flow_id: String,
        flow_name: String,
        workitems: Vec<JobDataWorkItem>,
        updated_at: DateTime<Utc>,
    }
}

model! {
    pub struct JobData {
        job_type: String,
        workspace_job_data: JobDataWorkspace,
        action_job_data: JobDataAction,
        system_job_data: JobDataSystem,
        flow_job_data: JobDataFlow,
    }
}

model! {
    pub struct JobLogSummaryLogErrors {
        error_code: String,
        error_msg: String,
        error_count: f64,
    }
}

model! {
    pub struct JobLogSummaryRepoDownloadJob {
        scanned_file_count: f64,
        quarantined_file_count: f64,
        detected_filetype: String,
        inputs_count: String,
        outputs_count: String,
    }
}

model! {
    pub struct JobLogSummaryWorkspaceJob {
        resources_add: f64,
        resources_modify: f64,
        resources_destroy: f64,
    }
}

model! {
    pub struct JobLogSummaryWorkitems {
        workspace_id: String,
        job_id: String,
        resources_add: f64,
        resources_modify: f64,
        resources_destroy: f64,
        log_url: String,
    }
}

model! {
    pub struct JobLogSummaryFlowJob {
        workitems_completed: f64,
        workitems_pending: f64,
        workitems_failed: f64,
        workitems: Vec<JobLogSummaryWorkitems>,
    }
}

model! {
    pub struct JobLogSummaryActionJobRecap {
        target: Vec<String>,
        ok: f64,
        changed: f64,
        failed: f64,
        skipped: f64,
        unreachable: f64,
    }
}

model! {
    pub struct JobLogSummaryActionJob {
        target_count: f64,
        task_count: f64,
        play_count: f64,
        recap: JobLogSummaryActionJobRecap,
    }
}

model! {
    pub struct JobLogSummarySystemJob {
        target_count: f64,
        success: f64,
        failed: f64,
    }
}

model! {
    /// Digest of a job's log
    pub struct JobLogSummary {
        job_id: String,
        job_type: String,
        log_start_at: DateTime<Utc>,
        log_analyzed_till: DateTime<Utc>,
        elapsed_time: f64,
        log_errors: Vec<JobLogSummaryLogErrors>,
        repo_download_job: JobLogSummaryRepoDownloadJob,
        workspace_job: JobLogSummaryWorkspaceJob,
        flow_job: JobLogSummaryFlowJob,
        action_job: JobLogSummaryActionJob,
        system_job: JobLogSummarySystemJob,
    }
}

model! {
    /// Job, used both as request body and as response
    pub struct Job {
        id: String,
        name: String,
        description: String,
        location: String,
        resource_group: String,
        command_object: String,
        command_object_id: String,
        command_name: String,
        command_parameter: String,
        command_options: Vec<String>,
        inputs: Vec<VariableData>,
        settings: Vec<VariableData>,
        tags: Vec<String>,
        submitted_at: DateTime<Utc>,
        submitted_by: String,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        duration: String,
        status: JobStatus,
        data: JobData,
        bastion: BastionResourceDefinition,
        log_summary: JobLogSummary,
        log_store_url: String,
        state_store_url: String,
        results_url: String,
        updated_at: DateTime<Utc>,
    }
}
