use reqwest::Method;

/// The client's backend operations, each mapped to one fixed REST endpoint.
/// The mapping is total: every variant has exactly one method and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    ListProjects,
    SaveProject,
    ListUsers,
    SaveUser,
    ListEntries,
    SubmitEntry,
    ListOvertimeRequests,
    SubmitOvertimeRequest,
    ResolveOvertimeRequest,
    PayrollReport,
    ListNotifications,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Login,
        Operation::ListProjects,
        Operation::SaveProject,
        Operation::ListUsers,
        Operation::SaveUser,
        Operation::ListEntries,
        Operation::SubmitEntry,
        Operation::ListOvertimeRequests,
        Operation::SubmitOvertimeRequest,
        Operation::ResolveOvertimeRequest,
        Operation::PayrollReport,
        Operation::ListNotifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::ListProjects => "listProjects",
            Operation::SaveProject => "saveProject",
            Operation::ListUsers => "listUsers",
            Operation::SaveUser => "saveUser",
            Operation::ListEntries => "listEntries",
            Operation::SubmitEntry => "submitEntry",
            Operation::ListOvertimeRequests => "listOvertimeRequests",
            Operation::SubmitOvertimeRequest => "submitOvertimeRequest",
            Operation::ResolveOvertimeRequest => "resolveOvertimeRequest",
            Operation::PayrollReport => "payrollReport",
            Operation::ListNotifications => "listNotifications",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::ListProjects
            | Operation::ListUsers
            | Operation::ListEntries
            | Operation::ListOvertimeRequests
            | Operation::PayrollReport
            | Operation::ListNotifications => Method::GET,
            Operation::Login
            | Operation::SaveProject
            | Operation::SaveUser
            | Operation::SubmitEntry
            | Operation::SubmitOvertimeRequest
            | Operation::ResolveOvertimeRequest => Method::POST,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Operation::Login => "/auth/login",
            Operation::ListProjects => "/projects",
            Operation::SaveProject => "/projects",
            Operation::ListUsers => "/users",
            Operation::SaveUser => "/users",
            Operation::ListEntries => "/entries",
            Operation::SubmitEntry => "/entries",
            Operation::ListOvertimeRequests => "/overtime",
            Operation::SubmitOvertimeRequest => "/overtime",
            Operation::ResolveOvertimeRequest => "/overtime/resolve",
            Operation::PayrollReport => "/reports/payroll",
            Operation::ListNotifications => "/notifications",
        }
    }
}
