//! Built-in datasets served by the mock directory.
//!
//! These mirror what the governance backend returns today. Once a real
//! backend is wired in through the query boundary these become test
//! fixtures only.

use super::*;

pub fn users() -> Vec<User> {
    let rows = [
        ("1", "John Smith", "EMP001", "Jane Doe", "6067", "Arby's", "2023-01-15"),
        ("2", "Jane Doe", "EMP002", "Bob Johnson", "359422", "Baskin-Robbins", "2022-05-20"),
        ("3", "Bob Johnson", "EMP003", "Alice Williams", "359739", "Buffalo Wild Wings", "2023-03-10"),
        ("4", "Alice Williams", "EMP004", "Charlie Brown", "7749", "Dunkin'", "2022-11-05"),
        ("5", "Charlie Brown", "EMP005", "Diana Prince", "358682", "Jimmy John's", "2023-06-18"),
        ("6", "Diana Prince", "EMP006", "John Smith", "306008", "SONIC", "2022-09-12"),
    ];
    rows.iter()
        .map(|(id, name, emp_id, manager, store_code, brand, start_date)| User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            ),
            emp_id: emp_id.to_string(),
            manager: manager.to_string(),
            store_code: store_code.to_string(),
            brand: brand.to_string(),
            title: None,
            department: None,
            start_date: start_date.to_string(),
        })
        .collect()
}

pub fn user_groups() -> Vec<UserGroup> {
    let rows = [
        ("1", "IT Administrators", "Group for IT administrators with system access", "2023-01-15", 25),
        ("2", "HR Managers", "Human resources management team", "2023-02-20", 12),
        ("3", "Finance Team", "Financial operations and accounting team", "2023-03-10", 18),
        ("4", "Sales Department", "Sales and business development team", "2022-11-05", 45),
        ("5", "Marketing Group", "Marketing and communications team", "2023-06-18", 22),
        ("6", "Executive Team", "Executive leadership and management", "2022-09-12", 8),
        ("7", "Store Managers", "Regional and store management personnel", "2023-04-25", 150),
    ];
    rows.iter()
        .map(|(id, group_name, description, creation_date, number_of_users)| UserGroup {
            id: id.to_string(),
            group_name: group_name.to_string(),
            description: description.to_string(),
            creation_date: creation_date.to_string(),
            number_of_users: *number_of_users,
        })
        .collect()
}

pub fn applications() -> Vec<Application> {
    let rows = [
        ("1", "Active Directory", "Directory Service", "IT Department", "IT", "2024-01-15"),
        ("2", "Oracle ERP", "ERP System", "Finance Team", "Finance", "2024-01-14"),
        ("3", "SAP HR", "HR System", "HR Department", "HR", "2024-01-13"),
        ("4", "Workday", "HRIS", "HR Department", "HR", "2024-01-12"),
        ("5", "Salesforce CRM", "CRM", "Sales Team", "Sales", "2024-01-11"),
        ("6", "ServiceNow", "ITSM", "IT Department", "IT", "2024-01-10"),
    ];
    rows.iter()
        .map(|(id, application_name, application_type, owner, department, last_sync)| Application {
            id: id.to_string(),
            application_name: application_name.to_string(),
            application_type: application_type.to_string(),
            owner: owner.to_string(),
            department: department.to_string(),
            status: "Active".into(),
            last_sync: last_sync.to_string(),
        })
        .collect()
}

pub fn entitlements() -> Vec<Entitlement> {
    let rows: [(&str, &str, &str, &str, &str, Risk, &str, &str); 10] = [
        ("1", "Administrator", "Role", "Active Directory", "Full administrative access to Active Directory", Risk::High, "2024-01-10", "Global"),
        ("2", "Finance Manager", "Role", "Oracle ERP", "Access to financial management functions", Risk::Medium, "2024-01-08", "Finance Department"),
        ("3", "HR Recruiter", "Role", "SAP HR", "Access to recruitment and candidate management", Risk::Low, "2024-01-05", "HR Department"),
        ("4", "Employee Self-Service", "Profile", "Workday", "Self-service access to employee information", Risk::Low, "2024-01-12", "All Employees"),
        ("5", "Sales Representative", "Role", "Salesforce CRM", "Access to sales opportunities and customer data", Risk::Medium, "2024-01-09", "Sales Department"),
        ("6", "IT Support", "Role", "ServiceNow", "Access to IT service management and ticketing", Risk::Medium, "2024-01-07", "IT Department"),
        ("7", "Read Only Access", "Permission", "Active Directory", "Read-only access to directory information", Risk::Low, "2024-01-11", "Global"),
        ("8", "Database Administrator", "Role", "Oracle ERP", "Full access to database administration", Risk::High, "2024-01-06", "IT Department"),
        ("9", "User Account Manager", "Role", "Active Directory", "Manage user accounts and permissions", Risk::Medium, "2024-01-09", "IT Department"),
        ("10", "Financial Analyst", "Role", "Oracle ERP", "Access to financial reporting and analysis", Risk::Medium, "2024-01-08", "Finance Department"),
    ];
    rows.iter()
        .map(
            |(id, entitlement_name, entitlement_type, application_name, description, risk, last_reviewed, scope)| {
                Entitlement {
                    id: id.to_string(),
                    entitlement_name: entitlement_name.to_string(),
                    entitlement_type: entitlement_type.to_string(),
                    application_name: application_name.to_string(),
                    description: description.to_string(),
                    risk: *risk,
                    last_reviewed: last_reviewed.to_string(),
                    scope: scope.to_string(),
                }
            },
        )
        .collect()
}

pub fn stores() -> Vec<StoreRecord> {
    let rows = [
        ("1", "Arby's Downtown", "ARB-001", "New York, NY", "Arby's", "Northeast"),
        ("2", "Baskin-Robbins Main St", "BR-045", "Los Angeles, CA", "Baskin-Robbins", "West"),
        ("3", "Buffalo Wild Wings Central", "BWW-123", "Chicago, IL", "Buffalo Wild Wings", "Midwest"),
        ("4", "Dunkin' Express", "DD-789", "Houston, TX", "Dunkin'", "South"),
        ("5", "Jimmy John's University", "JJ-234", "Phoenix, AZ", "Jimmy John's", "West"),
        ("6", "SONIC Drive-In", "SON-567", "Philadelphia, PA", "SONIC", "Northeast"),
    ];
    rows.iter()
        .map(|(id, store_name, store_number, location, brand, region)| StoreRecord {
            id: id.to_string(),
            store_name: store_name.to_string(),
            store_number: store_number.to_string(),
            location: location.to_string(),
            brand: brand.to_string(),
            region: region.to_string(),
            status: "Active".into(),
        })
        .collect()
}

pub fn regions() -> Vec<Region> {
    let rows = [
        ("1", "Northeast", "Northeast region covering New York, Pennsylvania, and surrounding states", 125, "NY, PA, NJ, CT, MA"),
        ("2", "Southeast", "Southeast region covering Florida, Georgia, and surrounding states", 180, "FL, GA, SC, NC, TN"),
        ("3", "Midwest", "Midwest region covering Illinois, Ohio, and surrounding states", 150, "IL, OH, MI, IN, WI"),
        ("4", "Southwest", "Southwest region covering Texas, Arizona, and surrounding states", 200, "TX, AZ, NM, OK"),
        ("5", "West", "West region covering California, Washington, and surrounding states", 220, "CA, WA, OR, NV"),
        ("6", "Mountain", "Mountain region covering Colorado, Utah, and surrounding states", 95, "CO, UT, WY, MT"),
    ];
    rows.iter()
        .map(|(id, region_name, description, number_of_stores, states)| Region {
            id: id.to_string(),
            region_name: region_name.to_string(),
            description: description.to_string(),
            number_of_stores: *number_of_stores,
            states: states.to_string(),
            status: "Active".into(),
        })
        .collect()
}

pub fn custom_groups() -> Vec<CustomGroup> {
    let rows = [
        ("1", "High Volume Stores", "Stores with sales above $1M annually", "John Smith", "2023-01-15", 45),
        ("2", "New Store Openings", "Stores opened in the last 6 months", "Jane Doe", "2023-02-20", 12),
        ("3", "Training Stores", "Designated stores for employee training", "Bob Johnson", "2023-03-10", 18),
        ("4", "24/7 Operations", "Stores operating 24 hours a day", "Alice Williams", "2022-11-05", 35),
        ("5", "Drive-Thru Only", "Stores with drive-thru service only", "Charlie Brown", "2023-06-18", 22),
        ("6", "Test Market Stores", "Stores used for testing new products and promotions", "Diana Prince", "2022-09-12", 8),
    ];
    rows.iter()
        .map(|(id, group_name, description, created_by, creation_date, number_of_stores)| CustomGroup {
            id: id.to_string(),
            group_name: group_name.to_string(),
            description: description.to_string(),
            created_by: created_by.to_string(),
            creation_date: creation_date.to_string(),
            number_of_stores: *number_of_stores,
            status: "Active".into(),
        })
        .collect()
}

pub fn roles() -> Vec<Role> {
    fn role(name: &str, description: &str, category: RoleCategory, privileges: &[&str]) -> Role {
        Role {
            name: name.to_string(),
            description: description.to_string(),
            category,
            privileges: privileges.iter().map(|p| p.to_string()).collect(),
        }
    }

    vec![
        role(
            "District Manager",
            "Oversees multiple stores within a district, manages operations, and ensures compliance with company standards.",
            RoleCategory::Regional,
            &["View Reports", "Manage Stores", "View Analytics", "Manage Users", "View Dashboard", "Export Data"],
        ),
        role(
            "Region Leaders",
            "Leads regional operations, coordinates district managers, and implements strategic initiatives across the region.",
            RoleCategory::Regional,
            &["View Reports", "Manage Stores", "View Analytics", "Manage Users", "Manage Roles", "View Dashboard", "Export Data", "Manage Settings"],
        ),
        role(
            "VPs",
            "Vice Presidents responsible for high-level strategic planning, decision-making, and organizational leadership.",
            RoleCategory::Regional,
            &["View Reports", "Manage Stores", "View Analytics", "Manage Users", "Manage Roles", "View Dashboard", "Export Data", "Manage Settings", "View Audit Logs", "Manage Policies"],
        ),
        role(
            "Support Teams",
            "Provides operational support, training, and assistance to stores and regional management teams.",
            RoleCategory::Regional,
            &["View Reports", "View Analytics", "View Dashboard", "Manage Users", "View User Details"],
        ),
        role(
            "Store manager",
            "Manages daily store operations, staff scheduling, inventory, and customer service standards.",
            RoleCategory::Store,
            &["View Reports", "Manage Inventory", "Manage Schedules", "View Dashboard", "View User Details"],
        ),
        role(
            "Bar manager",
            "Oversees bar operations, manages bar staff, inventory, and ensures quality beverage service.",
            RoleCategory::Store,
            &["View Reports", "Manage Inventory", "Manage Schedules", "View Dashboard"],
        ),
        role(
            "Assistant managers",
            "Assists store manager with daily operations, staff supervision, and administrative tasks.",
            RoleCategory::Store,
            &["View Reports", "View Dashboard", "Manage Schedules", "View User Details"],
        ),
        role(
            "Shift leaders",
            "Leads shifts, supervises staff during assigned periods, and ensures operational standards are met.",
            RoleCategory::Store,
            &["View Dashboard", "View Reports", "View User Details"],
        ),
        role(
            "Franchise Admin",
            "Manages franchise operations, relationships, compliance, and administrative processes for franchise locations.",
            RoleCategory::Corporate,
            &["Manage Users", "Manage Stores", "View Reports", "Manage Access Requests", "Approve Access Requests", "View Dashboard", "Export Data"],
        ),
        role(
            "Technology manager",
            "Oversees IT infrastructure, systems, technology implementations, and technical support across the organization.",
            RoleCategory::Corporate,
            &["Manage Settings", "Manage Applications", "View Audit Logs", "Manage Permissions", "View Dashboard", "Export Data"],
        ),
        role(
            "customer service manager",
            "Manages customer service operations, handles escalations, and ensures high-quality customer experience.",
            RoleCategory::Corporate,
            &["View User Details", "View Reports", "Manage Access Requests", "View Dashboard", "Manage Certifications"],
        ),
    ]
}
