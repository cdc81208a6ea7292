//! The built-in HR module table.
//!
//! This is the only place modules and their features are declared. Routes
//! derive from the module id (`/{id}`, admin under `/{id}/admin`); feature
//! routes must stay inside their module's namespace or registry construction
//! fails.

use corehr_auth::{Action, Permission};
use corehr_core::ModuleId;

use crate::module::{Feature, Module};

pub fn default_modules() -> Vec<Module> {
    vec![
        employees(),
        attendance(),
        leaves(),
        payroll(),
        expenses(),
        benefits(),
        recruitment(),
        performance(),
        training(),
        documents(),
        assets(),
        announcements(),
    ]
}

fn employees() -> Module {
    let id = ModuleId::Employees;
    Module::new(id, "Employees", "Employee directory and personnel records", "users")
        .with_features([
            Feature::new("directory", "Directory", "Browse and search all employees", "/employees")
                .with_icon("list"),
            Feature::new(
                "profile",
                "Employee Profile",
                "Personal, contract, and contact details",
                "/employees/profile",
            )
            .with_icon("id-card"),
            Feature::new(
                "org-chart",
                "Org Chart",
                "Reporting lines and team structure",
                "/employees/org-chart",
            )
            .with_icon("network"),
            Feature::new(
                "onboarding",
                "Onboarding",
                "Checklists for new joiners",
                "/employees/onboarding",
            )
            .requiring([Permission::scoped(id, Action::Create)]),
        ])
        .with_admin_features([
            Feature::new(
                "table",
                "Employee Table",
                "Bulk edit personnel records",
                "/employees/admin/table",
            ),
            Feature::new(
                "offboarding",
                "Offboarding",
                "Terminations and exit processing",
                "/employees/admin/offboarding",
            )
            .requiring([Permission::scoped(id, Action::Delete)]),
        ])
}

fn attendance() -> Module {
    let id = ModuleId::Attendance;
    Module::new(id, "Attendance", "Clock-ins, timesheets, and schedules", "clock")
        .with_features([
            Feature::new("tracker", "Time Tracker", "Clock in and out", "/attendance")
                .with_icon("timer"),
            Feature::new(
                "timesheet",
                "My Timesheet",
                "Weekly and monthly hours",
                "/attendance/timesheet",
            ),
            Feature::new(
                "schedule",
                "Work Schedule",
                "Shift plans and rotations",
                "/attendance/schedule",
            ),
        ])
        .with_admin_features([
            Feature::new(
                "approvals",
                "Timesheet Approvals",
                "Review and approve submitted hours",
                "/attendance/admin/approvals",
            )
            .requiring([Permission::scoped(id, Action::Update)]),
            Feature::new(
                "policies",
                "Attendance Policies",
                "Grace periods and overtime rules",
                "/attendance/admin/policies",
            ),
        ])
}

fn leaves() -> Module {
    let id = ModuleId::Leaves;
    Module::new(id, "Leaves", "Leave requests, balances, and calendars", "calendar-off")
        .with_features([
            Feature::new("requests", "My Requests", "Submit and track leave requests", "/leaves")
                .with_icon("send"),
            Feature::new(
                "balance",
                "Leave Balance",
                "Remaining days per leave type",
                "/leaves/balance",
            ),
            Feature::new(
                "calendar",
                "Team Calendar",
                "Who is away and when",
                "/leaves/calendar",
            )
            .with_icon("calendar"),
        ])
        .with_admin_features([
            Feature::new(
                "approvals",
                "Leave Approvals",
                "Approve or reject pending requests",
                "/leaves/admin/approvals",
            )
            .requiring([Permission::scoped(id, Action::Update)]),
            Feature::new(
                "types",
                "Leave Types",
                "Configure leave categories and accrual",
                "/leaves/admin/types",
            ),
        ])
}

fn payroll() -> Module {
    let id = ModuleId::Payroll;
    Module::new(id, "Payroll", "Salary runs, payslips, and adjustments", "banknote")
        .with_features([
            Feature::new("payslips", "My Payslips", "Monthly payslip archive", "/payroll")
                .with_icon("receipt"),
            Feature::new(
                "tax-documents",
                "Tax Documents",
                "Annual statements and tax forms",
                "/payroll/tax-documents",
            ),
        ])
        .with_admin_features([
            Feature::new(
                "runs",
                "Payroll Runs",
                "Prepare and execute salary runs",
                "/payroll/admin/runs",
            )
            .requiring([Permission::scoped(id, Action::Create)]),
            Feature::new(
                "adjustments",
                "Adjustments",
                "One-off bonuses and deductions",
                "/payroll/admin/adjustments",
            )
            .requiring([Permission::scoped(id, Action::Update)]),
            Feature::new(
                "reports",
                "Payroll Reports",
                "Cost breakdowns by team and period",
                "/payroll/admin/reports",
            ),
        ])
}

fn expenses() -> Module {
    let id = ModuleId::Expenses;
    Module::new(id, "Expenses", "Expense claims and reimbursements", "wallet")
        .with_features([
            Feature::new("claims", "My Claims", "Submit and track expense claims", "/expenses")
                .with_icon("file-plus"),
            Feature::new(
                "history",
                "Reimbursement History",
                "Paid and rejected claims",
                "/expenses/history",
            ),
        ])
        .with_admin_features([
            Feature::new(
                "approvals",
                "Claim Approvals",
                "Review submitted claims",
                "/expenses/admin/approvals",
            )
            .requiring([Permission::scoped(id, Action::Update)]),
            Feature::new(
                "categories",
                "Expense Categories",
                "Claim categories and limits",
                "/expenses/admin/categories",
            ),
        ])
}

fn benefits() -> Module {
    let id = ModuleId::Benefits;
    Module::new(id, "Benefits", "Insurance, pensions, and perks", "heart-handshake")
        .with_features([
            Feature::new("overview", "My Benefits", "Active plans and coverage", "/benefits")
                .with_icon("shield"),
            Feature::new(
                "enrollment",
                "Enrollment",
                "Enroll in or change benefit plans",
                "/benefits/enrollment",
            )
            .requiring([Permission::scoped(id, Action::Update)]),
        ])
        .with_admin_features([Feature::new(
            "plans",
            "Benefit Plans",
            "Configure plans, providers, and eligibility",
            "/benefits/admin/plans",
        )])
}

fn recruitment() -> Module {
    let id = ModuleId::Recruitment;
    Module::new(id, "Recruitment", "Openings, candidates, and interviews", "briefcase")
        .with_features([
            Feature::new("openings", "Openings", "Active job openings", "/recruitment")
                .with_icon("megaphone"),
            Feature::new(
                "candidates",
                "Candidates",
                "Pipeline by opening and stage",
                "/recruitment/candidates",
            ),
            Feature::new(
                "interviews",
                "My Interviews",
                "Scheduled interviews and feedback",
                "/recruitment/interviews",
            ),
        ])
        .with_admin_features([
            Feature::new(
                "pipeline",
                "Pipeline Settings",
                "Stages, scorecards, and templates",
                "/recruitment/admin/pipeline",
            ),
            Feature::new(
                "offers",
                "Offers",
                "Draft and approve offers",
                "/recruitment/admin/offers",
            )
            .requiring([Permission::scoped(id, Action::Create)]),
        ])
}

fn performance() -> Module {
    let id = ModuleId::Performance;
    Module::new(id, "Performance", "Reviews, goals, and feedback", "target")
        .with_features([
            Feature::new("goals", "My Goals", "Personal goals and progress", "/performance")
                .with_icon("flag"),
            Feature::new(
                "reviews",
                "My Reviews",
                "Review cycles and outcomes",
                "/performance/reviews",
            ),
            Feature::new(
                "feedback",
                "Feedback",
                "Give and request feedback",
                "/performance/feedback",
            )
            .requiring([Permission::scoped(id, Action::Create)]),
        ])
        .with_admin_features([Feature::new(
            "cycles",
            "Review Cycles",
            "Plan and launch review cycles",
            "/performance/admin/cycles",
        )])
}

fn training() -> Module {
    let id = ModuleId::Training;
    Module::new(id, "Training", "Courses, certifications, and learning paths", "graduation-cap")
        .with_features([
            Feature::new("courses", "Course Catalog", "Browse available courses", "/training")
                .with_icon("book-open"),
            Feature::new(
                "my-learning",
                "My Learning",
                "Enrolled courses and progress",
                "/training/my-learning",
            ),
            Feature::new(
                "certifications",
                "Certifications",
                "Held and expiring certificates",
                "/training/certifications",
            ),
        ])
        .with_admin_features([Feature::new(
            "catalog",
            "Catalog Management",
            "Publish courses and assign audiences",
            "/training/admin/catalog",
        )])
}

fn documents() -> Module {
    let id = ModuleId::Documents;
    Module::new(id, "Documents", "Contracts, policies, and personal files", "folder")
        .with_features([
            Feature::new("my-documents", "My Documents", "Personal document vault", "/documents")
                .with_icon("file"),
            Feature::new(
                "company-policies",
                "Company Policies",
                "Published policies and handbooks",
                "/documents/company-policies",
            ),
        ])
        .with_admin_features([
            Feature::new(
                "templates",
                "Templates",
                "Contract and letter templates",
                "/documents/admin/templates",
            ),
            Feature::new(
                "signatures",
                "Signature Requests",
                "Track outstanding signatures",
                "/documents/admin/signatures",
            )
            .requiring([Permission::scoped(id, Action::Update)]),
        ])
}

fn assets() -> Module {
    let id = ModuleId::Assets;
    Module::new(id, "Assets", "Company equipment and assignments", "laptop")
        .with_features([
            Feature::new("my-assets", "My Assets", "Equipment assigned to me", "/assets")
                .with_icon("package"),
            Feature::new(
                "requests",
                "Asset Requests",
                "Request new or replacement equipment",
                "/assets/requests",
            )
            .requiring([Permission::scoped(id, Action::Create)]),
        ])
        .with_admin_features([Feature::new(
            "inventory",
            "Inventory",
            "Full asset register and assignments",
            "/assets/admin/inventory",
        )])
}

fn announcements() -> Module {
    let id = ModuleId::Announcements;
    Module::new(id, "Announcements", "Company news and notices", "megaphone")
        .with_features([Feature::new(
            "feed",
            "News Feed",
            "Latest company announcements",
            "/announcements",
        )
        .with_icon("newspaper")])
        .with_admin_features([Feature::new(
            "compose",
            "Compose",
            "Publish and schedule announcements",
            "/announcements/admin/compose",
        )
        .requiring([Permission::scoped(id, Action::Create)])])
}
