//! Sample `tinymix -t -a` output

/// Google dump covering every value type
pub const GOOGLE_DUMP: &str = "Mixer name: 'sm8250-mtp-snd-card'\n\
Number of controls: 6\n\
ctl\ttype\tnum\tname\tvalue\n\
0\tBOOL\t1\tMasterMute\tON\n\
1\tBOOL\t2\tSpeaker Switch\tOFF\tON\n\
2\tENUM\t3\tRX Route\tZERO\t>AIF1\tAIF2\n\
3\tENUM\t1\tFixed Rate\tKHZ_48\n\
\n\
4\tINT\t2\tRX Volume\t84\t-6\n\
5\tBYTE\t4\tCal Data\t0a\tff\t00\t7F\n";

/// Number of controls in [`GOOGLE_DUMP`]
pub const GOOGLE_DUMP_CONTROLS: usize = 6;

/// Usage text printed by the upstream build when run without arguments
pub const UPSTREAM_USAGE: &str = "usage: tinymix [options] <command>\n\
options:\n\
\t-h, --help     : prints this help message and exits\n\
\t-D, --card     : specifies the card number of the mixer\n\
commands:\n\
\tget NAME|ID    : prints the values of a control\n\
\tset NAME|ID VALUE(S) ... : sets the value of a control\n\
\tcontrols       : lists controls of the mixer\n\
\tcontents       : lists controls of the mixer and their contents\n";

/// Usage text printed by the Google build when run without arguments
pub const GOOGLE_USAGE: &str = "Mixer name: 'sm8250-mtp-snd-card'\n\
Number of controls: 6\n\
ctl\ttype\tnum\tname\n";
