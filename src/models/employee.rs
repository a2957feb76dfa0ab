//! Employee model.
//!
//! The employee record supplies the daily allowance base amount and the
//! identity stamped onto calculated allowance records. It is reference data
//! owned by an external registry and supplied by the caller per calculation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an employee entitled to travel allowances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// National identity number (cedula) identifying the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's position or job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The daily allowance base amount in currency units.
    pub daily_allowance: Decimal,
    /// Whether the employee is currently active.
    pub active: bool,
}

impl Employee {
    /// Returns the daily allowance base for this employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingAllowanceBase`] if the allowance base
    /// is not positive.
    pub fn allowance_base(&self) -> EngineResult<Decimal> {
        if self.daily_allowance <= Decimal::ZERO {
            return Err(EngineError::MissingAllowanceBase {
                employee_id: self.id.clone(),
            });
        }
        Ok(self.daily_allowance)
    }
}

/// A registry of employees keyed by cedula.
///
/// Built from the employee reference file at startup. The registry
/// supplies the daily allowance base when a trip request does not carry
/// one explicitly.
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    employees: HashMap<String, Employee>,
}

impl EmployeeRegistry {
    /// Builds a registry from a list of employees.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Looks up an employee by cedula.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] if no employee with the
    /// given cedula exists.
    pub fn lookup(&self, cedula: &str) -> EngineResult<&Employee> {
        self.employees
            .get(cedula)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                cedula: cedula.to_string(),
            })
    }

    /// Returns the number of employees in the registry.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the registry holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee(daily_allowance: Decimal) -> Employee {
        Employee {
            id: "402-1234567-8".to_string(),
            name: "Juan Perez".to_string(),
            position: "Medico".to_string(),
            department: "Salud Publica".to_string(),
            daily_allowance,
            active: true,
        }
    }

    #[test]
    fn test_allowance_base_positive() {
        let employee = sample_employee(Decimal::new(1000, 0));
        assert_eq!(employee.allowance_base().unwrap(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_allowance_base_zero_fails() {
        let employee = sample_employee(Decimal::ZERO);
        let error = employee.allowance_base().unwrap_err();
        assert!(error.to_string().contains("402-1234567-8"));
    }

    #[test]
    fn test_allowance_base_negative_fails() {
        let employee = sample_employee(Decimal::new(-500, 0));
        assert!(employee.allowance_base().is_err());
    }

    #[test]
    fn test_employee_deserialization() {
        let json = r#"{
            "id": "402-9876543-2",
            "name": "Maria Garcia",
            "position": "Enfermera",
            "department": "Atencion al Paciente",
            "daily_allowance": "1500.00",
            "active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "402-9876543-2");
        assert_eq!(employee.daily_allowance, Decimal::new(150000, 2));
    }

    #[test]
    fn test_registry_lookup() {
        let registry = EmployeeRegistry::new(vec![sample_employee(Decimal::new(1000, 0))]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("402-1234567-8").unwrap().name, "Juan Perez");
    }

    #[test]
    fn test_registry_lookup_unknown_cedula() {
        let registry = EmployeeRegistry::new(vec![]);
        assert!(registry.is_empty());
        let error = registry.lookup("000-0000000-0").unwrap_err();
        assert!(matches!(error, EngineError::EmployeeNotFound { .. }));
    }
}
