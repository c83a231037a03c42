//! roundups-ffi
//!
//! Minimal FFI surface that exposes the round-up engine to mobile hosts.

use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_double, c_int, c_longlong},
    ptr,
};

use chrono::{DateTime, TimeZone, Utc};

use roundups_core::{
    api_apply_patch, api_calculate_round_up, api_period_statistics, CoreError, RoundUpCalculator,
};
use roundups_domain::{
    PeriodTotals, PolicyPatch, RoundUpDestination, RoundUpMethod, RoundUpPolicy, Transaction,
};

/// Opaque pointer used by external callers to hold policy state.
#[repr(C)]
pub struct PolicyHandle {
    inner: RoundUpPolicy,
}

impl PolicyHandle {
    fn new(policy: RoundUpPolicy) -> *mut Self {
        Box::into_raw(Box::new(Self { inner: policy }))
    }
}

/// Opaque pointer holding a recorded purchase history.
#[repr(C)]
pub struct HistoryHandle {
    transactions: Vec<Transaction>,
}

/// Calculation outcome exposed over FFI.
#[repr(C)]
pub struct FfiCalculation {
    pub original_amount: c_double,
    pub round_up_amount: c_double,
    pub new_total: c_double,
    pub destination: c_int,
}

/// One reporting bucket exposed over FFI.
#[repr(C)]
#[derive(Default, Clone, Copy)]
pub struct FfiPeriodTotals {
    pub round_ups: c_double,
    pub invested: c_double,
    pub donated: c_double,
    pub transaction_count: c_int,
}

/// The three reporting buckets exposed over FFI.
#[repr(C)]
#[derive(Default, Clone, Copy)]
pub struct FfiPeriodStatistics {
    pub current_month: FfiPeriodTotals,
    pub last_month: FfiPeriodTotals,
    pub year_to_date: FfiPeriodTotals,
}

#[no_mangle]
pub extern "C" fn roundups_policy_default() -> *mut PolicyHandle {
    PolicyHandle::new(RoundUpPolicy::default())
}

#[no_mangle]
pub extern "C" fn roundups_policy_free(handle: *mut PolicyHandle) {
    if handle.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(handle));
    }
}

#[no_mangle]
pub extern "C" fn roundups_policy_set_enabled(handle: *mut PolicyHandle, enabled: c_int) -> c_int {
    if handle.is_null() {
        return 1;
    }
    let policy = unsafe { &mut (*handle).inner };
    policy.is_enabled = enabled != 0;
    0
}

/// Reconfigures the policy through a validated edit. Pass a non-positive
/// `custom_amount` to leave it unset. Returns 0 on success.
#[no_mangle]
pub extern "C" fn roundups_policy_configure(
    handle: *mut PolicyHandle,
    method_code: c_int,
    custom_amount: c_double,
    minimum: c_double,
    maximum: c_double,
    destination_code: c_int,
    out_error: *mut *mut c_char,
) -> c_int {
    clear_error(out_error);
    if handle.is_null() {
        unsafe {
            write_error(out_error, "policy handle is null");
        }
        return 1;
    }
    let policy = unsafe { &mut (*handle).inner };

    let patch = PolicyPatch {
        method: Some(method_from_code(method_code)),
        custom_amount: (custom_amount > 0.0).then_some(custom_amount),
        minimum_round_up: Some(minimum),
        maximum_round_up: Some(maximum),
        default_destination: Some(destination_from_code(destination_code)),
        ..PolicyPatch::default()
    };

    match api_apply_patch(policy, patch) {
        Ok(updated) => {
            *policy = updated;
            0
        }
        Err(err) => {
            unsafe {
                write_core_error(out_error, err);
            }
            2
        }
    }
}

#[no_mangle]
pub extern "C" fn roundups_calculate(
    handle: *const PolicyHandle,
    amount: c_double,
    out: *mut FfiCalculation,
    out_error: *mut *mut c_char,
) -> c_int {
    clear_error(out_error);
    if handle.is_null() || out.is_null() {
        unsafe {
            write_error(out_error, "policy handle or output is null");
        }
        return 1;
    }

    let policy = unsafe { &(*handle).inner };
    let result = api_calculate_round_up(amount, policy);

    unsafe {
        (*out).original_amount = result.original_amount;
        (*out).round_up_amount = result.round_up_amount;
        (*out).new_total = result.new_total;
        (*out).destination = destination_to_code(result.destination);
    }

    0
}

#[no_mangle]
pub extern "C" fn roundups_history_new() -> *mut HistoryHandle {
    Box::into_raw(Box::new(HistoryHandle {
        transactions: Vec::new(),
    }))
}

#[no_mangle]
pub extern "C" fn roundups_history_free(handle: *mut HistoryHandle) {
    if handle.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(handle));
    }
}

/// Records a purchase: the round-up is computed under the supplied policy
/// (zeroed for excluded categories) and the transaction is appended.
#[no_mangle]
pub extern "C" fn roundups_history_record(
    handle: *mut HistoryHandle,
    policy: *const PolicyHandle,
    amount: c_double,
    merchant: *const c_char,
    category: *const c_char,
    epoch_seconds: c_longlong,
    out_error: *mut *mut c_char,
) -> c_int {
    clear_error(out_error);
    if handle.is_null() || policy.is_null() {
        unsafe {
            write_error(out_error, "history or policy handle is null");
        }
        return 1;
    }

    let merchant = match unsafe { c_string_argument(merchant) } {
        Ok(value) => value,
        Err(err) => {
            unsafe {
                write_core_error(out_error, err);
            }
            return 2;
        }
    };
    let category = match unsafe { c_string_argument(category) } {
        Ok(value) => value,
        Err(err) => {
            unsafe {
                write_core_error(out_error, err);
            }
            return 3;
        }
    };
    let date = match timestamp_argument(epoch_seconds) {
        Ok(value) => value,
        Err(err) => {
            unsafe {
                write_core_error(out_error, err);
            }
            return 4;
        }
    };

    let policy = unsafe { &(*policy).inner };
    let history = unsafe { &mut (*handle).transactions };

    let result = RoundUpCalculator::calculate_for_category(amount, &category, policy);
    let transaction = Transaction::new(amount, merchant, category, date)
        .with_round_up(result.round_up_amount, result.destination);
    history.push(transaction);

    0
}

#[no_mangle]
pub extern "C" fn roundups_history_statistics(
    handle: *const HistoryHandle,
    as_of_epoch_seconds: c_longlong,
    out: *mut FfiPeriodStatistics,
    out_error: *mut *mut c_char,
) -> c_int {
    clear_error(out_error);
    if handle.is_null() || out.is_null() {
        unsafe {
            write_error(out_error, "history handle or output is null");
        }
        return 1;
    }
    let as_of = match timestamp_argument(as_of_epoch_seconds) {
        Ok(value) => value,
        Err(err) => {
            unsafe {
                write_core_error(out_error, err);
            }
            return 2;
        }
    };

    let history = unsafe { &(*handle).transactions };
    let statistics = api_period_statistics(history, as_of);

    unsafe {
        (*out).current_month = totals_to_ffi(statistics.current_month);
        (*out).last_month = totals_to_ffi(statistics.last_month);
        (*out).year_to_date = totals_to_ffi(statistics.year_to_date);
    }

    0
}

/// Frees an error string previously returned through an `out_error`
/// parameter.
#[no_mangle]
pub extern "C" fn roundups_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(value));
    }
}

fn method_from_code(code: c_int) -> RoundUpMethod {
    match code {
        1 => RoundUpMethod::CustomAmount,
        _ => RoundUpMethod::NearestDollar,
    }
}

fn destination_from_code(code: c_int) -> RoundUpDestination {
    match code {
        1 => RoundUpDestination::Charity,
        _ => RoundUpDestination::Investment,
    }
}

fn destination_to_code(destination: RoundUpDestination) -> c_int {
    match destination {
        RoundUpDestination::Investment => 0,
        RoundUpDestination::Charity => 1,
    }
}

fn totals_to_ffi(totals: PeriodTotals) -> FfiPeriodTotals {
    FfiPeriodTotals {
        round_ups: totals.round_ups,
        invested: totals.invested,
        donated: totals.donated,
        transaction_count: totals.transaction_count as c_int,
    }
}

fn timestamp_argument(epoch_seconds: c_longlong) -> Result<DateTime<Utc>, CoreError> {
    Utc.timestamp_opt(epoch_seconds, 0)
        .single()
        .ok_or_else(|| {
            CoreError::InvalidOperation(format!("invalid epoch timestamp: {epoch_seconds}"))
        })
}

fn clear_error(out_error: *mut *mut c_char) {
    if out_error.is_null() {
        return;
    }
    unsafe {
        *out_error = ptr::null_mut();
    }
}

unsafe fn write_error(out_error: *mut *mut c_char, message: &str) {
    if out_error.is_null() {
        return;
    }
    if let Ok(cstring) = CString::new(message) {
        *out_error = cstring.into_raw();
    }
}

unsafe fn write_core_error(out_error: *mut *mut c_char, err: CoreError) {
    write_error(out_error, &err.to_string());
}

unsafe fn c_string_argument(ptr: *const c_char) -> Result<String, CoreError> {
    if ptr.is_null() {
        return Err(CoreError::InvalidOperation(
            "null string pointer received".into(),
        ));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(|s| s.to_string())
        .map_err(|err| CoreError::InvalidOperation(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_round_trips_through_the_c_abi() {
        let policy = roundups_policy_default();
        let mut out = FfiCalculation {
            original_amount: 0.0,
            round_up_amount: 0.0,
            new_total: 0.0,
            destination: -1,
        };
        let mut error: *mut c_char = ptr::null_mut();

        let status = roundups_calculate(policy, 19.40, &mut out, &mut error);
        assert_eq!(status, 0);
        assert!(error.is_null());
        assert_eq!(out.round_up_amount, 0.60);
        assert_eq!(out.new_total, 20.00);
        assert_eq!(out.destination, 0);

        roundups_policy_free(policy);
    }

    #[test]
    fn invalid_configure_reports_an_error_string() {
        let policy = roundups_policy_default();
        let mut error: *mut c_char = ptr::null_mut();

        // Custom method without a custom amount is rejected.
        let status = roundups_policy_configure(policy, 1, 0.0, 0.01, 5.0, 0, &mut error);
        assert_eq!(status, 2);
        assert!(!error.is_null());

        let message = unsafe { CStr::from_ptr(error) }
            .to_str()
            .expect("utf8 error message")
            .to_string();
        assert!(message.contains("custom round-up amount"), "{message}");

        roundups_string_free(error);
        roundups_policy_free(policy);
    }

    #[test]
    fn history_records_and_aggregates() {
        let policy = roundups_policy_default();
        let history = roundups_history_new();
        let mut error: *mut c_char = ptr::null_mut();
        // 2025-03-10T00:00:00Z
        let when: c_longlong = 1_741_564_800;

        let merchant = CString::new("Corner Cafe").unwrap();
        let category = CString::new("Dining").unwrap();
        let status = roundups_history_record(
            history,
            policy,
            19.40,
            merchant.as_ptr(),
            category.as_ptr(),
            when,
            &mut error,
        );
        assert_eq!(status, 0);

        let mut out = FfiPeriodStatistics::default();
        let status = roundups_history_statistics(history, when, &mut out, &mut error);
        assert_eq!(status, 0);
        assert_eq!(out.current_month.round_ups, 0.60);
        assert_eq!(out.current_month.transaction_count, 1);
        assert_eq!(out.year_to_date.invested, 0.60);

        roundups_history_free(history);
        roundups_policy_free(policy);
    }
}
