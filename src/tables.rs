use std::io::Write;

use serde::Serialize;

/// パラメーター表が持つエントリー数
///
/// GRIB1のパラメーター番号は1オクテットで記録されるため、0から255までの256個となる。
pub const NUMBER_OF_PARAMETERS: usize = 256;

/// 割り当てられていないパラメーターの説明
pub const UNDEFINED_DESCRIPTION: &str = "undefined";

/// パラメーター表のエントリー
///
/// パラメーター番号はエントリーを格納した配列のインデックスで表現するため、
/// エントリー自体には記録しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterEntry {
    /// 略称
    ///
    /// 割り当てられていないパラメーターは`var{番号}`となる。
    pub mnemonic: &'static str,

    /// 名前と単位を空白で連結した説明
    ///
    /// 割り当てられていないパラメーターは`undefined`となる。
    pub description: &'static str,

    /// 名前
    pub name: &'static str,

    /// 単位
    ///
    /// 割り当てられていないパラメーターは空文字列となる。
    pub units: &'static str,
}

impl ParameterEntry {
    /// パラメーターが割り当てられているか確認する。
    pub fn is_defined(&self) -> bool {
        self.description != UNDEFINED_DESCRIPTION
    }
}

/// パラメーター番号から略称と説明を引く、変更不能な表
#[derive(Debug, Clone, Copy)]
pub struct ParameterTable {
    /// 表の名前
    name: &'static str,

    /// 作成中枢の識別子
    centre: u8,

    /// パラメーター表の版番号
    table_number: u8,

    /// パラメーター番号をインデックスとするエントリー
    entries: &'static [ParameterEntry; NUMBER_OF_PARAMETERS],
}

impl ParameterTable {
    /// パラメーター表を構築する。
    ///
    /// # 引数
    ///
    /// * `name` - 表の名前
    /// * `centre` - 作成中枢の識別子
    /// * `table_number` - パラメーター表の版番号
    /// * `entries` - パラメーター番号をインデックスとするエントリー
    pub const fn new(
        name: &'static str,
        centre: u8,
        table_number: u8,
        entries: &'static [ParameterEntry; NUMBER_OF_PARAMETERS],
    ) -> Self {
        Self {
            name,
            centre,
            table_number,
            entries,
        }
    }

    /// 表の名前を返す。
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 作成中枢の識別子を返す。
    pub fn centre(&self) -> u8 {
        self.centre
    }

    /// パラメーター表の版番号を返す。
    pub fn table_number(&self) -> u8 {
        self.table_number
    }

    /// エントリー数を返す。
    pub const fn len(&self) -> usize {
        NUMBER_OF_PARAMETERS
    }

    /// 表は常に256個のエントリーを持つため、`false`を返す。
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// 1オクテットのパラメーター番号に対応するエントリーを返す。
    pub fn get(&self, code: u8) -> &'static ParameterEntry {
        &self.entries[code as usize]
    }

    /// パラメーター番号に対応するエントリーを返す。
    ///
    /// # 引数
    ///
    /// * `code` - パラメーター番号
    ///
    /// # 戻り値
    ///
    /// パラメーター番号が0から255の範囲にある場合はエントリー、
    /// 範囲外の場合は`TableError::CodeOutOfRange`
    pub fn lookup(&self, code: i32) -> TableResult<&'static ParameterEntry> {
        let index = u8::try_from(code).map_err(|_| {
            tracing::debug!(table = self.name, code, "parameter code out of range");
            TableError::CodeOutOfRange(code)
        })?;

        Ok(self.get(index))
    }

    /// パラメーター番号が割り当てられているか確認する。
    pub fn is_defined(&self, code: u8) -> bool {
        self.get(code).is_defined()
    }

    /// パラメーター番号とエントリーを番号順に返すイテレーターを返す。
    pub fn entries(&self) -> impl Iterator<Item = (u8, &'static ParameterEntry)> {
        let entries: &'static [ParameterEntry; NUMBER_OF_PARAMETERS] = self.entries;
        (0..=u8::MAX).zip(entries.iter())
    }

    /// 割り当てられているパラメーターのみを番号順に返すイテレーターを返す。
    pub fn defined_entries(&self) -> impl Iterator<Item = (u8, &'static ParameterEntry)> {
        self.entries().filter(|(_, entry)| entry.is_defined())
    }

    /// 略称からパラメーター番号とエントリーを探す。
    ///
    /// 略称は大文字と小文字を区別せずに比較する。
    /// 割り当てられていないパラメーターの`var{番号}`も検索できる。
    pub fn find_by_mnemonic(&self, mnemonic: &str) -> TableResult<(u8, &'static ParameterEntry)> {
        self.entries()
            .find(|(_, entry)| entry.mnemonic.eq_ignore_ascii_case(mnemonic))
            .ok_or_else(|| {
                tracing::debug!(table = self.name, mnemonic, "mnemonic not found");
                TableError::MnemonicNotFound(mnemonic.to_string())
            })
    }

    /// 表の内容を人が読める形式で出力する。
    ///
    /// # 引数
    ///
    /// * `writer` - 出力先
    /// * `include_undefined` - 割り当てられていないパラメーターも出力する場合は`true`
    pub fn pretty_print<W>(&self, writer: &mut W, include_undefined: bool) -> TableResult<()>
    where
        W: Write,
    {
        let entries: Vec<_> = self
            .entries()
            .filter(|(_, entry)| include_undefined || entry.is_defined())
            .collect();
        writeln!(writer, "表名: {}", self.name).map_err(write_error)?;
        writeln!(writer, "作成中枢: {}", self.centre).map_err(write_error)?;
        writeln!(writer, "表番号: {}", self.table_number).map_err(write_error)?;
        writeln!(writer, "パラメーター数: {}", entries.len()).map_err(write_error)?;
        for (code, entry) in entries {
            writeln!(
                writer,
                "{:>3}  {:<6}  {}",
                code, entry.mnemonic, entry.description
            )
            .map_err(write_error)?;
        }

        Ok(())
    }

    /// 表の内容をCSV形式で出力する。
    ///
    /// # 引数
    ///
    /// * `writer` - 出力先
    /// * `include_undefined` - 割り当てられていないパラメーターも出力する場合は`true`
    pub fn write_csv<W>(&self, writer: &mut W, include_undefined: bool) -> TableResult<()>
    where
        W: Write,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["code", "mnemonic", "name", "units"])
            .map_err(csv_error)?;
        for (code, entry) in self.entries() {
            if !include_undefined && !entry.is_defined() {
                continue;
            }
            let code = code.to_string();
            csv_writer
                .write_record([code.as_str(), entry.mnemonic, entry.name, entry.units])
                .map_err(csv_error)?;
        }
        csv_writer.flush().map_err(write_error)?;

        Ok(())
    }
}

/// パラメーター表エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// パラメーター番号が0から255の範囲外
    #[error("パラメーター番号が範囲外です。`{0}`")]
    CodeOutOfRange(i32),

    /// 略称に一致するパラメーターが存在しない
    #[error("略称に一致するパラメーターがありません。`{0}`")]
    MnemonicNotFound(String),

    /// 出力エラー
    #[error("パラメーター表の出力に失敗しました。{0}")]
    Write(String),
}

/// パラメーター表結果型
pub type TableResult<T> = Result<T, TableError>;

fn write_error(e: std::io::Error) -> TableError {
    TableError::Write(format!("{e}"))
}

fn csv_error(e: csv::Error) -> TableError {
    TableError::Write(format!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmwf_160::ecmwf_table_160;

    #[test]
    fn lookup_rejects_codes_outside_octet_range() {
        let table = ecmwf_table_160();
        assert_eq!(table.lookup(-1), Err(TableError::CodeOutOfRange(-1)));
        assert_eq!(table.lookup(256), Err(TableError::CodeOutOfRange(256)));
        assert_eq!(
            table.lookup(i32::MIN),
            Err(TableError::CodeOutOfRange(i32::MIN))
        );
        assert!(table.lookup(0).is_ok());
        assert!(table.lookup(255).is_ok());
    }

    #[test]
    fn lookup_agrees_with_get() {
        let table = ecmwf_table_160();
        for code in 0..=u8::MAX {
            assert_eq!(table.lookup(code as i32).unwrap(), table.get(code));
        }
    }

    #[test]
    fn entries_are_yielded_in_code_order() {
        let table = ecmwf_table_160();
        let codes: Vec<u8> = table.entries().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), NUMBER_OF_PARAMETERS);
        assert_eq!(codes.first(), Some(&0));
        assert_eq!(codes.last(), Some(&255));
        assert!(codes.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn find_by_mnemonic_ignores_case() {
        let table = ecmwf_table_160();
        let (code, entry) = table.find_by_mnemonic("msl").unwrap();
        assert_eq!(code, 151);
        assert_eq!(entry.mnemonic, "MSL");
        assert_eq!(table.find_by_mnemonic("VAR0").unwrap().0, 0);
        assert_eq!(
            table.find_by_mnemonic("XYZ"),
            Err(TableError::MnemonicNotFound("XYZ".to_string()))
        );
    }

    #[test]
    fn write_csv_skips_undefined_by_default() {
        let table = ecmwf_table_160();
        let mut buf = Vec::new();
        table.write_csv(&mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("code,mnemonic,name,units"));
        assert_eq!(lines.next(), Some("127,AT,Atmospheric tide+,-"));
        assert!(text.contains("\n167,2T,2 metre temperature,K\n"));
        assert!(!text.contains("var0"));
        assert_eq!(text.lines().count(), 1 + table.defined_entries().count());
    }

    #[test]
    fn write_csv_with_undefined_has_every_code() {
        let table = ecmwf_table_160();
        let mut buf = Vec::new();
        table.write_csv(&mut buf, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1 + NUMBER_OF_PARAMETERS);
        assert!(text.contains("\n0,var0,undefined,\n"));
    }

    #[test]
    fn pretty_print_lists_defined_entries() {
        let table = ecmwf_table_160();
        let mut buf = Vec::new();
        table.pretty_print(&mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("表名: ECMWF local table 160\n"));
        assert!(text.contains("作成中枢: 98\n"));
        assert!(text.contains("228  TP      Total precipitation m\n"));
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn pretty_print_with_undefined_lists_every_code() {
        let table = ecmwf_table_160();
        let mut buf = Vec::new();
        table.pretty_print(&mut buf, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("パラメーター数: 256\n"));
        assert!(text.contains("  0  var0    undefined\n"));
        assert!(text.contains("167  2T      2 metre temperature K\n"));
        assert_eq!(text.lines().count(), 4 + NUMBER_OF_PARAMETERS);
    }

    #[test]
    fn write_csv_output_parses_back() {
        let table = ecmwf_table_160();
        let mut buf = Vec::new();
        table.write_csv(&mut buf, false).unwrap();
        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["code", "mnemonic", "name", "units"]
        );
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), table.defined_entries().count());
        let sd = records.iter().find(|r| &r[0] == "141").unwrap();
        assert_eq!(&sd[1], "SD");
        assert_eq!(&sd[2], "Snow depth");
        assert_eq!(&sd[3], "m (of water)");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_reported() {
        let table = ecmwf_table_160();
        assert!(matches!(
            table.write_csv(&mut FailingWriter, false),
            Err(TableError::Write(_))
        ));
        assert!(matches!(
            table.pretty_print(&mut FailingWriter, false),
            Err(TableError::Write(_))
        ));
    }
}
