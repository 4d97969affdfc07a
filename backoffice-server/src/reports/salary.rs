//! Salary report
//!
//! Shift-based salary per employee and per position. The formula is a flat
//! rate per worked shift (`SALARY_BASE_RATE`); only shifts fully contained
//! in the requested range count.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::models::{User, UserRole};

use crate::db::repository::shift::EmployeeShift;
use crate::utils::time::DateRange;

/// Salary total of one position (role)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSalary {
    /// Role wire name (`"WAITER"`, ...)
    pub name: String,
    pub value: f64,
}

/// Salary line of one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSalary {
    pub name: String,
    pub position: UserRole,
    /// Number of qualifying shifts in the range
    pub shifts: usize,
    pub salary: f64,
}

/// Range totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStats {
    pub total_salary: f64,
    /// Number of active employees considered, with or without shifts
    pub employee_count: usize,
}

/// Full salary report payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryReport {
    pub position_data: Vec<PositionSalary>,
    pub employee_data: Vec<EmployeeSalary>,
    pub stats: SalaryStats,
}

/// Count the shifts of `user_id` fully contained in the range
fn qualifying_shifts(shifts: &[EmployeeShift], user_id: &str, range: DateRange) -> usize {
    shifts
        .iter()
        .filter(|s| {
            s.user_id == user_id && s.start_time >= range.start && s.end_time <= range.end
        })
        .count()
}

/// Build the salary report for all active employees.
///
/// `shifts` may contain shifts merely overlapping the range (the repository
/// query only bounds the working set); the strict containment filter is
/// applied here. Position rows appear in the order their role is first
/// encountered while walking `employees`.
pub fn build_salary_report(
    employees: &[User],
    shifts: &[EmployeeShift],
    range: DateRange,
    base_rate: f64,
) -> SalaryReport {
    let mut position_data: Vec<PositionSalary> = Vec::new();
    let mut position_index: HashMap<UserRole, usize> = HashMap::new();
    let mut employee_data: Vec<EmployeeSalary> = Vec::with_capacity(employees.len());

    for employee in employees {
        let shift_count = qualifying_shifts(shifts, &employee.id, range);
        let salary = base_rate * shift_count as f64;

        let idx = *position_index.entry(employee.role).or_insert_with(|| {
            position_data.push(PositionSalary {
                name: employee.role.as_str().to_string(),
                value: 0.0,
            });
            position_data.len() - 1
        });
        position_data[idx].value += salary;

        employee_data.push(EmployeeSalary {
            name: employee.full_name.clone(),
            position: employee.role,
            shifts: shift_count,
            salary,
        });
    }

    let total_salary = position_data.iter().map(|p| p.value).sum();

    SalaryReport {
        position_data,
        employee_data,
        stats: SalaryStats {
            total_salary,
            employee_count: employees.len(),
        },
    }
}
