use super::convert;
use crate::models::{
    Job, JobData, JobDataAction, JobDataFlow, JobDataSystem, JobDataTemplate, JobDataWorkItem,
    JobDataWorkItemLastJob, JobDataWorkspace, JobLogSummary, JobLogSummaryActionJob,
    JobLogSummaryActionJobRecap, JobLogSummaryFlowJob, JobLogSummaryLogErrors,
    JobLogSummaryRepoDownloadJob, JobLogSummarySystemJob, JobLogSummaryWorkitems,
    JobLogSummaryWorkspaceJob, JobStatus, JobStatusAction, JobStatusFlow, JobStatusSchematicsResources,
    JobStatusSystem, JobStatusTemplate, JobStatusWorkitem, JobStatusWorkspace,
};

// status

convert! {
    JobStatusTemplate {
        "template_id" => template_id,
        "template_name" => template_name,
        "flow_index" => flow_index,
        "status_code" => status_code,
        "status_message" => status_message,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatusWorkitem {
        "workspace_id" => workspace_id,
        "workspace_name" => workspace_name,
        "job_id" => job_id,
        "status_code" => status_code,
        "status_message" => status_message,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatusFlow {
        "flow_id" => flow_id,
        "flow_name" => flow_name,
        "status_code" => status_code,
        "status_message" => status_message,
        "workitems" => workitems: blocks,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatusWorkspace {
        "workspace_name" => workspace_name,
        "status_code" => status_code,
        "status_message" => status_message,
        "flow_status" => flow_status: block,
        "template_status" => template_status: blocks,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatusAction {
        "action_name" => action_name,
        "status_code" => status_code,
        "status_message" => status_message,
        "bastion_status_code" => bastion_status_code,
        "bastion_status_message" => bastion_status_message,
        "targets_status_code" => targets_status_code,
        "targets_status_message" => targets_status_message,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatusSchematicsResources {
        "status_code" => status_code,
        "status_message" => status_message,
        "schematics_resource_id" => schematics_resource_id,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatusSystem {
        "system_status_message" => system_status_message,
        "system_status_code" => system_status_code,
        "schematics_resource_status" => schematics_resource_status: blocks,
        "updated_at" => updated_at,
    }
}

convert! {
    JobStatus {
        "workspace_job_status" => workspace_job_status: block,
        "action_job_status" => action_job_status: block,
        "system_job_status" => system_job_status: block,
        "flow_job_status" => flow_job_status: block,
    }
}

// data

convert! {
    JobDataTemplate {
        "template_id" => template_id,
        "template_name" => template_name,
        "flow_index" => flow_index,
        "inputs" => inputs: blocks,
        "outputs" => outputs: blocks,
        "settings" => settings: blocks,
        "updated_at" => updated_at,
    }
}

convert! {
    JobDataWorkspace {
        "workspace_name" => workspace_name,
        "flow_id" => flow_id,
        "flow_name" => flow_name,
        "inputs" => inputs: blocks,
        "outputs" => outputs: blocks,
        "settings" => settings: blocks,
        "template_data" => template_data: blocks,
        "updated_at" => updated_at,
    }
}

convert! {
    JobDataAction {
        "action_name" => action_name,
        "inputs" => inputs: blocks,
        "outputs" => outputs: blocks,
        "settings" => settings: blocks,
        "updated_at" => updated_at,
        "inventory_record" => inventory_record: block,
        "materialized_inventory" => materialized_inventory,
    }
}

convert! {
    JobDataSystem {
        "key_id" => key_id,
        "schematics_resource_id" => schematics_resource_id,
        "updated_at" => updated_at,
    }
}

convert! {
    JobDataWorkItemLastJob {
        "command_object" => command_object,
        "command_object_name" => command_object_name,
        "command_object_id" => command_object_id,
        "command_name" => command_name,
        "job_id" => job_id,
        "job_status" => job_status,
    }
}

convert! {
    JobDataWorkItem {
        "command_object_id" => command_object_id,
        "command_object_name" => command_object_name,
        "layers" => layers,
        "source_type" => source_type,
        "source" => source: block,
        "inputs" => inputs: blocks,
        "outputs" => outputs: blocks,
        "settings" => settings: blocks,
        "last_job" => last_job: block,
        "updated_at" => updated_at,
    }
}

convert! {
    JobDataFlow {
        "flow_id" => flow_id,
        "flow_name" => flow_name,
        "workitems" => workitems: blocks,
        "updated_at" => updated_at,
    }
}

convert! {
    JobData {
        "job_type" => job_type,
        "workspace_job_data" => workspace_job_data: block,
        "action_job_data" => action_job_data: block,
        "system_job_data" => system_job_data: block,
        "flow_job_data" => flow_job_data: block,
    }
}

// log summary

convert! {
    JobLogSummaryLogErrors {
        "error_code" => error_code,
        "error_msg" => error_msg,
        "error_count" => error_count,
    }
}

convert! {
    JobLogSummaryRepoDownloadJob {
        "scanned_file_count" => scanned_file_count,
        "quarantined_file_count" => quarantined_file_count,
        "detected_filetype" => detected_filetype,
        "inputs_count" => inputs_count,
        "outputs_count" => outputs_count,
    }
}

convert! {
    JobLogSummaryWorkspaceJob {
        "resources_add" => resources_add,
        "resources_modify" => resources_modify,
        "resources_destroy" => resources_destroy,
    }
}

convert! {
    JobLogSummaryWorkitems {
        "workspace_id" => workspace_id,
        "job_id" => job_id,
        "resources_add" => resources_add,
        "resources_modify" => resources_modify,
        "resources_destroy" => resources_destroy,
        "log_url" => log_url,
    }
}

convert! {
    JobLogSummaryFlowJob {
        "workitems_completed" => workitems_completed,
        "workitems_pending" => workitems_pending,
        "workitems_failed" => workitems_failed,
        "workitems" => workitems: blocks,
    }
}

convert! {
    JobLogSummaryActionJobRecap {
        "target" => target,
        "ok" => ok,
        "changed" => changed,
        "failed" => failed,
        "skipped" => skipped,
        "unreachable" => unreachable,
    }
}

convert! {
    JobLogSummaryActionJob {
        "target_count" => target_count,
        "task_count" => task_count,
        "play_count" => play_count,
        "recap" => recap: block,
    }
}

convert! {
    JobLogSummarySystemJob {
        "target_count" => target_count,
        "success" => success,
        "failed" => failed,
    }
}

convert! {
    JobLogSummary {
        "job_id" => job_id,
        "job_type" => job_type,
        "log_start_at" => log_start_at,
        "log_analyzed_till" => log_analyzed_till,
        "elapsed_time" => elapsed_time,
        "log_errors" => log_errors: blocks,
        "repo_download_job" => repo_download_job: block,
        "workspace_job" => workspace_job: block,
        "flow_job" => flow_job: block,
        "action_job" => action_job: block,
        "system_job" => system_job: block,
    }
}

convert! {
    Job {
        "name" => name,
        "description" => description,
        "location" => location,
        "resource_group" => resource_group,
        "command_object" => command_object,
        "command_object_id" => command_object_id,
        "command_name" => command_name,
        "command_parameter" => command_parameter,
        "command_options" => command_options,
        "job_inputs" => inputs: blocks,
        "job_env_settings" => settings: blocks,
        "tags" => tags,
        "bastion" => bastion: block,
    }
    computed {
        "submitted_at" => submitted_at,
        "submitted_by" => submitted_by,
        "start_at" => start_at,
        "end_at" => end_at,
        "duration" => duration,
        "status" => status: block,
        "data" => data: block,
        "log_summary" => log_summary: block,
        "log_store_url" => log_store_url,
        "state_store_url" => state_store_url,
        "results_url" => results_url,
        "updated_at" => updated_at,
    }
}
